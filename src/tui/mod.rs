pub mod event_loop;
pub mod state;
pub mod view;


use crate::catalog::Product;
use crate::config::AppConfig;
use crate::search::filter_products;
use crate::store::QueryStore;
use crate::tui::state::{Focus, build_render_plan};
use crate::tui::view::Screen;
use anyhow::Result;
use tracing::{debug, info};

/// The application controller: owns the catalog, the query state, the store
/// and the screen, and drives the filter/render pipeline.
pub struct TuiApp {
    pub config: AppConfig,
    pub catalog: Vec<Product>,
    pub store: Option<QueryStore>,
    pub screen: Box<dyn Screen>,
    /// Live contents of the search field.
    pub input: String,
    /// Last committed (debounced) query; results derive from this, not from
    /// the field, so a burst in progress never re-filters.
    pub committed: String,
    pub focus: Focus,
}

impl TuiApp {
    pub fn new(
        config: AppConfig,
        catalog: Vec<Product>,
        store: Option<QueryStore>,
        screen: Box<dyn Screen>,
    ) -> Self {
        Self {
            config,
            catalog,
            store,
            screen,
            input: String::new(),
            committed: String::new(),
            focus: Focus::Search,
        }
    }

    /// Pull the previous query out of the store, if any. Runs exactly once,
    /// before the first render.
    pub fn restore_query(&mut self) {
        if let Some(query) = self.store.as_ref().and_then(|s| s.restore()) {
            debug!(?query, "restored previous query");
            self.input = query.clone();
            self.committed = query;
        }
    }

    /// Filter with the committed query and redraw the whole frame.
    pub fn render(&mut self) -> Result<()> {
        let results = filter_products(
            &self.catalog,
            &self.committed,
            self.config.min_search_length,
        );
        let (w, h) = self.screen.size()?;
        let plan = build_render_plan(&results, &self.input, self.focus, w, h);
        self.screen.draw(&plan)
    }

    /// A debounced (or cleared) query lands: persist it, adopt it, redraw.
    pub fn commit_query(&mut self, query: String) -> Result<()> {
        if let Some(store) = &self.store {
            store.save(&query);
        }
        self.committed = query;
        self.render()
    }

    /// Run the interactive session. Startup order is fixed: screen init
    /// (fail fast, nothing else runs on error), query restore, then the
    /// event loop which performs the first render, wires input handling and
    /// schedules structured-data emission.
    pub async fn run(mut self) -> Result<()> {
        self.screen.init()?;
        self.restore_query();
        info!("vitrina started");
        let result = self.event_loop().await;
        self.screen.shutdown()?;
        result
    }
}
