use crate::services::{ApiClient, ApiError};
use shared::{DashboardAction, DashboardQuery, DashboardState, Month, RequestToken};
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// `use_reducer` adapter around the shared dashboard state
#[derive(Debug, Default, PartialEq)]
pub struct DashboardStore(DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        if next == self.0 {
            // Same Rc means no re-render
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

impl Deref for DashboardStore {
    type Target = DashboardState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub type DashboardDispatcher = UseReducerDispatcher<DashboardStore>;

pub struct UseDashboardResult {
    pub state: UseReducerHandle<DashboardStore>,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub on_search: Callback<InputEvent>,
    pub on_month_change: Callback<Event>,
    pub previous_page: Callback<MouseEvent>,
    pub next_page: Callback<MouseEvent>,
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let store = use_reducer(DashboardStore::default);
    let last_token = use_mut_ref(RequestToken::default);

    // Reload all three sources whenever month, page or search changes
    use_effect_with(store.query(), {
        let loader = HttpLoader {
            api_client: api_client.clone(),
            dispatcher: store.dispatcher(),
        };
        let dispatcher = store.dispatcher();
        move |query: &DashboardQuery| {
            start_reload(
                &last_token,
                query,
                |action| dispatcher.dispatch(action),
                &loader,
            );
            || ()
        }
    });

    let on_search = {
        let dispatcher = store.dispatcher();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(DashboardAction::Search(input.value()));
        })
    };

    let on_month_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Month>() {
                Ok(month) => dispatcher.dispatch(DashboardAction::SelectMonth(month)),
                Err(error) => warn!(%error, "ignoring month selection"),
            }
        })
    };

    let previous_page = {
        let dispatcher = store.dispatcher();
        use_callback((), move |_: MouseEvent, _| {
            dispatcher.dispatch(DashboardAction::PreviousPage);
        })
    };

    let next_page = {
        let dispatcher = store.dispatcher();
        use_callback((), move |_: MouseEvent, _| {
            dispatcher.dispatch(DashboardAction::NextPage);
        })
    };

    UseDashboardResult {
        state: store,
        actions: UseDashboardActions {
            on_search,
            on_month_change,
            previous_page,
            next_page,
        },
    }
}

/// Starts the three loads of one reload. Each load reports back with a
/// `*Loaded` action carrying `token`.
pub trait DashboardLoader {
    fn load_transactions(&self, token: RequestToken, query: DashboardQuery);
    fn load_statistics(&self, token: RequestToken, month: Month);
    fn load_chart(&self, token: RequestToken, month: Month);
}

/// Issues a reload for `query`: takes the next token, announces it, then
/// starts every loader under that token.
pub fn start_reload(
    last_token: &RefCell<RequestToken>,
    query: &DashboardQuery,
    dispatch: impl Fn(DashboardAction),
    loader: &impl DashboardLoader,
) -> RequestToken {
    let token = {
        let mut last = last_token.borrow_mut();
        *last = last.next();
        *last
    };
    debug!(
        token = token.value(),
        month = %query.month,
        page = query.page,
        search = %query.search,
        "reloading dashboard"
    );
    dispatch(DashboardAction::ReloadStarted(token));

    loader.load_transactions(token, query.clone());
    loader.load_statistics(token, query.month);
    loader.load_chart(token, query.month);
    token
}

/// Fetches through [`ApiClient`] on the browser event loop
struct HttpLoader {
    api_client: ApiClient,
    dispatcher: DashboardDispatcher,
}

impl DashboardLoader for HttpLoader {
    fn load_transactions(&self, token: RequestToken, query: DashboardQuery) {
        let api_client = self.api_client.clone();
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            let result = api_client.get_transactions(&query).await.map_err(report);
            dispatcher.dispatch(DashboardAction::TransactionsLoaded { token, result });
        });
    }

    fn load_statistics(&self, token: RequestToken, month: Month) {
        let api_client = self.api_client.clone();
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            let result = api_client.get_statistics(month).await.map_err(report);
            dispatcher.dispatch(DashboardAction::StatisticsLoaded { token, result });
        });
    }

    fn load_chart(&self, token: RequestToken, month: Month) {
        let api_client = self.api_client.clone();
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            let result = api_client.get_chart_records(month).await.map_err(report);
            dispatcher.dispatch(DashboardAction::ChartLoaded { token, result });
        });
    }
}

fn report(error: ApiError) -> String {
    warn!(%error, "dashboard request failed");
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Transaction;

    #[derive(Debug, PartialEq)]
    enum Load {
        Transactions(RequestToken, DashboardQuery),
        Statistics(RequestToken, Month),
        Chart(RequestToken, Month),
    }

    #[derive(Default)]
    struct RecordingLoader {
        loads: RefCell<Vec<Load>>,
    }

    impl DashboardLoader for RecordingLoader {
        fn load_transactions(&self, token: RequestToken, query: DashboardQuery) {
            self.loads.borrow_mut().push(Load::Transactions(token, query));
        }

        fn load_statistics(&self, token: RequestToken, month: Month) {
            self.loads.borrow_mut().push(Load::Statistics(token, month));
        }

        fn load_chart(&self, token: RequestToken, month: Month) {
            self.loads.borrow_mut().push(Load::Chart(token, month));
        }
    }

    fn reduce(store: Rc<DashboardStore>, action: DashboardAction) -> Rc<DashboardStore> {
        store.reduce(action)
    }

    #[test]
    fn test_unchanged_state_keeps_same_rc() {
        let store = Rc::new(DashboardStore::default());
        let next = reduce(store.clone(), DashboardAction::PreviousPage);
        assert!(Rc::ptr_eq(&store, &next));
    }

    #[test]
    fn test_changed_state_produces_new_rc() {
        let store = Rc::new(DashboardStore::default());
        let next = reduce(store.clone(), DashboardAction::NextPage);
        assert!(!Rc::ptr_eq(&store, &next));
        assert_eq!(next.page(), 2);
        assert_eq!(store.page(), 1);
    }

    #[test]
    fn test_search_through_store_resets_page() {
        let mut store = Rc::new(DashboardStore::default());
        store = reduce(store, DashboardAction::NextPage);
        store = reduce(store, DashboardAction::Search("bike".to_string()));
        assert_eq!(store.search(), "bike");
        assert_eq!(store.page(), 1);
    }

    #[test]
    fn test_store_applies_current_completion() {
        let token = RequestToken::default().next();
        let mut store = Rc::new(DashboardStore::default());
        store = reduce(store, DashboardAction::ReloadStarted(token));
        store = reduce(
            store,
            DashboardAction::TransactionsLoaded {
                token,
                result: Ok(vec![Transaction {
                    id: "1".to_string(),
                    title: "Bike".to_string(),
                    description: String::new(),
                    price: "120".to_string(),
                    category: "sports".to_string(),
                    sold: false,
                    image: String::new(),
                }]),
            },
        );
        assert_eq!(store.visible_transactions().len(), 1);
    }

    #[test]
    fn test_mount_reload_starts_all_three_loads() {
        let last_token = RefCell::new(RequestToken::default());
        let loader = RecordingLoader::default();
        let dispatched = RefCell::new(Vec::new());
        let query = DashboardState::new().query();

        let token = start_reload(
            &last_token,
            &query,
            |action| dispatched.borrow_mut().push(action),
            &loader,
        );

        assert_eq!(token, RequestToken::default().next());
        assert_eq!(
            dispatched.into_inner(),
            vec![DashboardAction::ReloadStarted(token)]
        );
        assert_eq!(
            loader.loads.into_inner(),
            vec![
                Load::Transactions(
                    token,
                    DashboardQuery {
                        month: Month::MARCH,
                        page: 1,
                        search: String::new(),
                    }
                ),
                Load::Statistics(token, Month::MARCH),
                Load::Chart(token, Month::MARCH),
            ]
        );
    }

    #[test]
    fn test_bike_search_reloads_all_three_sources() {
        let mount = RequestToken::default().next();
        let last_token = RefCell::new(mount);
        let mut store = Rc::new(DashboardStore::default());
        store = reduce(store, DashboardAction::ReloadStarted(mount));
        store = reduce(store, DashboardAction::NextPage);
        store = reduce(store, DashboardAction::Search("bike".to_string()));

        let loader = RecordingLoader::default();
        let dispatched = RefCell::new(Vec::new());
        let token = start_reload(
            &last_token,
            &store.query(),
            |action| dispatched.borrow_mut().push(action),
            &loader,
        );

        assert_eq!(token, mount.next());
        assert_eq!(*last_token.borrow(), token);
        let expected_query = DashboardQuery {
            month: Month::MARCH,
            page: 1,
            search: "bike".to_string(),
        };
        assert_eq!(
            loader.loads.into_inner(),
            vec![
                Load::Transactions(token, expected_query),
                Load::Statistics(token, Month::MARCH),
                Load::Chart(token, Month::MARCH),
            ]
        );

        for action in dispatched.into_inner() {
            store = reduce(store, action);
        }
        assert!(store.transactions_status().is_loading());
        assert!(store.statistics_status().is_loading());
        assert!(store.chart_status().is_loading());

        // The mount reload resolving now is stale
        store = reduce(
            store,
            DashboardAction::TransactionsLoaded {
                token: mount,
                result: Ok(Vec::new()),
            },
        );
        assert!(store.transactions_status().is_loading());
    }
}
