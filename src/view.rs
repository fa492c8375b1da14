//! Navigation state for the browsing surface.
//!
//! All of the app's view state lives in one controller as an explicit tagged
//! union, rather than as scattered modal/selection flags. Rendering itself is
//! out of scope; this module only decides which view is active and validates
//! transitions against the catalog.

use log::debug;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::score::TastePreferences;
use crate::session::SessionStore;
use crate::store::RecipeStore;

/// Which view is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    /// Browsing one region by name.
    Region(String),
    /// The detail modal for one recipe id, over whichever browse view opened it.
    RecipeDetail(String),
}

/// How a recipe card is rendered. A closed set; consumers dispatch on the
/// variant once instead of comparing prop strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    List,
    Compact,
}

impl FromStr for CardVariant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(CardVariant::Default),
            "list" => Ok(CardVariant::List),
            "compact" => Ok(CardVariant::Compact),
            other => Err(CatalogError::UnknownCardVariant(other.to_string())),
        }
    }
}

/// Single owner of navigation state and session preferences.
pub struct ViewController<'a> {
    store: &'a RecipeStore,
    state: ViewState,
    /// The browse view to restore when the detail modal closes.
    browse: ViewState,
    session: SessionStore,
}

impl<'a> ViewController<'a> {
    pub fn new(store: &'a RecipeStore) -> Self {
        Self {
            store,
            state: ViewState::Home,
            browse: ViewState::Home,
            session: SessionStore::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn session(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Open the detail view for a recipe. The id is verified against the
    /// catalog first; an unknown id leaves the current view in place and
    /// returns false.
    pub fn open_recipe(&mut self, id: &str) -> bool {
        if self.store.lookup(id).is_none() {
            debug!("not opening detail view, unknown recipe {id:?}");
            return false;
        }
        if !matches!(self.state, ViewState::RecipeDetail(_)) {
            self.browse = self.state.clone();
        }
        self.state = ViewState::RecipeDetail(id.to_string());
        true
    }

    /// Close the detail view, restoring whichever browse view opened it.
    /// A no-op when no detail view is open.
    pub fn close_detail(&mut self) {
        if matches!(self.state, ViewState::RecipeDetail(_)) {
            self.state = self.browse.clone();
        }
    }

    /// Switch to browsing a region. Unknown regions are rejected.
    pub fn select_region(&mut self, name: &str) -> bool {
        if self.store.region(name).is_none() {
            debug!("not selecting unknown region {name:?}");
            return false;
        }
        self.state = ViewState::Region(name.to_string());
        self.browse = self.state.clone();
        true
    }

    pub fn go_home(&mut self) {
        self.state = ViewState::Home;
        self.browse = ViewState::Home;
    }

    /// The session's taste profile, or the default profile when none has
    /// been stored (or the stored blob no longer decodes).
    pub fn taste_preferences(&self) -> TastePreferences {
        self.session.get_or_default(PREFS_KEY)
    }

    pub fn set_taste_preferences(&mut self, prefs: &TastePreferences) {
        self.session.put(PREFS_KEY, prefs);
    }
}

const PREFS_KEY: &str = "taste_preferences";

/// A contextual cooking tip shown on the browse header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookingTip {
    pub title: &'static str,
    pub content: &'static str,
}

/// Pick the tip for an hour of day (0-23). Pure function; the caller supplies
/// the clock.
pub fn contextual_tip(hour: u8) -> CookingTip {
    if hour < 11 {
        CookingTip {
            title: "Perfect Morning Choice!",
            content: "South Indian breakfast is traditionally eaten fresh and warm. \
                      These recipes are perfect for starting your day with authentic flavors.",
        }
    } else if hour < 17 {
        CookingTip {
            title: "Brunch Time!",
            content: "These breakfast recipes make excellent brunch options. \
                      Try the dosa with extra chutneys for a satisfying meal.",
        }
    } else {
        CookingTip {
            title: "Light Evening Meal",
            content: "South Indian breakfast items are perfect for light dinners too. \
                      They're easy to digest and nutritious.",
        }
    }
}
