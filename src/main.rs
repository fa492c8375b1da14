use std::env;
use std::error::Error;
use std::process::ExitCode;

use log::debug;

use culinary_catalog::query::{DifficultyFilter, TimeFilter};
use culinary_catalog::{
    match_score, CatalogConfig, Recipe, RecipeQuery, RecipeStore, SortKey,
};

const USAGE: &str = "Usage: culinary-catalog <command> [args]

Commands:
  regions                      List regions and their recipe counts
  list [REGION]                List recipes, optionally in one region
      --category NAME          List one meal category instead (breakfast,
                               main, snack, dessert)
  search QUERY [options]       Search the catalog
      --sort KEY               popular | rating | time | difficulty | name | chef
      --difficulty LEVEL       all | Easy | Medium | Hard
      --time BUCKET            all | quick | medium | long
      --diet KEYWORD           Tag keyword, e.g. vegetarian
      --json                   Emit matching records as JSON
  show ID                      Print one recipe in full
  score ID                     Personal match score for one recipe
  stats                        Catalog-wide statistics";

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let store = RecipeStore::builtin();

    match args.first().map(String::as_str) {
        Some("regions") => {
            for region in store.regions() {
                println!("{} ({} recipes)", region.name, region.recipes.len());
            }
        }
        Some("list") => {
            let config = CatalogConfig::load()?;
            let query = RecipeQuery::new().sort(config.sort_key());
            let recipes = match args.get(1).map(String::as_str) {
                Some("--category") => {
                    let name = args.get(2).ok_or("--category needs a value")?;
                    let recipes = store.by_category(name);
                    if recipes.is_empty() {
                        eprintln!("no recipes in category {name:?}");
                        return Ok(ExitCode::FAILURE);
                    }
                    query.run_on(recipes)
                }
                Some(name) => {
                    let Some(region) = store.region(name) else {
                        eprintln!("no region named {name:?}");
                        return Ok(ExitCode::FAILURE);
                    };
                    query.run_on(region.recipes.iter())
                }
                None => query.run(store),
            };
            for recipe in recipes {
                print_line(recipe);
            }
        }
        Some("search") => {
            let text = args.get(1).ok_or("search needs a query argument")?;
            let mut query = RecipeQuery::new().text(text);
            let mut as_json = false;

            let mut rest = args[2..].iter();
            while let Some(flag) = rest.next() {
                match flag.as_str() {
                    "--sort" => {
                        let value = rest.next().ok_or("--sort needs a value")?;
                        query = query.sort(value.parse::<SortKey>()?);
                    }
                    "--difficulty" => {
                        let value = rest.next().ok_or("--difficulty needs a value")?;
                        match value.parse::<DifficultyFilter>()? {
                            DifficultyFilter::All => {}
                            DifficultyFilter::Only(level) => query = query.difficulty(level),
                        }
                    }
                    "--time" => {
                        let value = rest.next().ok_or("--time needs a value")?;
                        query = query.time(value.parse::<TimeFilter>()?);
                    }
                    "--diet" => {
                        let value = rest.next().ok_or("--diet needs a value")?;
                        query = query.diet(value.as_str());
                    }
                    "--json" => as_json = true,
                    other => return Err(format!("unknown flag {other:?}").into()),
                }
            }

            let hits = query.run(store);
            debug!("{} of {} recipes matched", hits.len(), store.len());
            if as_json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("No recipes matched.");
            } else {
                for recipe in hits {
                    print_line(recipe);
                }
            }
        }
        Some("show") => {
            let id = args.get(1).ok_or("show needs a recipe id")?;
            match store.lookup(id) {
                Some(recipe) => print_detail(recipe),
                None => {
                    println!("No recipe with id {id:?}.");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some("score") => {
            let id = args.get(1).ok_or("score needs a recipe id")?;
            let config = CatalogConfig::load()?;
            match store.lookup(id) {
                Some(recipe) => {
                    let score = match_score(recipe, &config.taste_preferences());
                    println!("{}: {}% personal match", recipe.title, score);
                }
                None => {
                    println!("No recipe with id {id:?}.");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some("stats") => {
            let stats = store.stats();
            println!("Recipes:    {}", stats.total_recipes);
            println!("Avg rating: {:.2}", stats.avg_rating);
            println!("Top chef:   {}", stats.top_chef);
        }
        _ => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_line(recipe: &Recipe) {
    println!(
        "{:<12} {:<28} {:<8} {:>4.1}* {:>5} reviews  {}",
        recipe.id, recipe.title, recipe.difficulty, recipe.rating, recipe.reviews, recipe.prep_time
    );
}

fn print_detail(recipe: &Recipe) {
    println!("{} ({})", recipe.title, recipe.id);
    println!("by {} | {} | {}", recipe.chef, recipe.difficulty, recipe.prep_time);
    println!();
    println!("{}", recipe.description);
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!();
    println!("Steps:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    if !recipe.nutrition.is_empty() {
        println!();
        println!("Nutrition (per serving):");
        for (nutrient, amount) in &recipe.nutrition {
            println!("  {nutrient}: {amount}");
        }
    }
}
