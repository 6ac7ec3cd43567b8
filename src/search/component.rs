//! Search form component

use crate::navigation::{NavigationExtras, Navigator, QueryParams};
use crate::search::validation::validate_username;

/// Base path of the user detail route
pub const DETAIL_ROUTE: &str = "/user";
/// Page requested on the detail view
pub const PAGE: u32 = 1;
/// Page size requested on the detail view
pub const PER_PAGE: u32 = 10;

/// A form submission. Front ends check `default_prevented` to know the
/// handler took over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Username search form state
pub struct SearchComponent<N: Navigator> {
    /// Current contents of the text input
    pub search_query: String,
    /// Whether the last submission failed validation
    pub is_input_error: bool,
    /// Message for the last failed submission, empty otherwise
    pub input_error_message: String,
    navigator: N,
}

impl<N: Navigator> SearchComponent<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            search_query: String::new(),
            is_input_error: false,
            input_error_message: String::new(),
            navigator,
        }
    }

    /// Input side of the two-way binding: store exactly what the field holds
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.search_query = value.into();
    }

    /// Validate the query and, when it passes, navigate to the user detail
    /// route with the untrimmed query as the route parameter.
    pub fn on_submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();

        match validate_username(&self.search_query) {
            Err(err) => {
                self.is_input_error = true;
                self.input_error_message = err.message().to_string();
            }
            Ok(()) => {
                self.is_input_error = false;
                self.input_error_message.clear();

                let commands = [DETAIL_ROUTE.to_string(), self.search_query.clone()];
                let extras = NavigationExtras::with_query_params(
                    QueryParams::new()
                        .with("page", PAGE)
                        .with("per_page", PER_PAGE),
                );
                self.navigator.navigate(&commands, &extras);
            }
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MockNavigator;
    use proptest::prelude::*;

    fn expect_user_navigation(mock: &mut MockNavigator, username: &'static str, times: usize) {
        mock.expect_navigate()
            .withf(move |commands, extras| {
                commands == ["/user".to_string(), username.to_string()]
                    && extras.query_params == QueryParams::new().with("page", 1).with("per_page", 10)
            })
            .times(times)
            .return_const(());
    }

    fn no_navigation() -> MockNavigator {
        let mut mock = MockNavigator::new();
        mock.expect_navigate().never();
        mock
    }

    fn submit<N: Navigator>(component: &mut SearchComponent<N>) -> SubmitEvent {
        let mut event = SubmitEvent::new();
        component.on_submit(&mut event);
        event
    }

    #[test]
    fn starts_clean() {
        let component = SearchComponent::new(no_navigation());
        assert_eq!(component.search_query, "");
        assert!(!component.is_input_error);
        assert_eq!(component.input_error_message, "");
    }

    #[test]
    fn valid_username_navigates_to_detail() {
        let mut mock = MockNavigator::new();
        expect_user_navigation(&mut mock, "lk", 1);

        let mut component = SearchComponent::new(mock);
        component.on_input("lk");
        let event = submit(&mut component);

        assert!(event.default_prevented());
        assert!(!component.is_input_error);
        assert_eq!(component.input_error_message, "");
    }

    #[test]
    fn username_with_space_is_rejected() {
        let mut component = SearchComponent::new(no_navigation());
        component.on_input("l k");
        submit(&mut component);

        assert!(component.is_input_error);
        assert_eq!(component.input_error_message, "Username contains space.");
    }

    #[test]
    fn empty_username_is_rejected() {
        let mut component = SearchComponent::new(no_navigation());
        component.on_input("");
        let event = submit(&mut component);

        assert!(event.default_prevented());
        assert!(component.is_input_error);
        assert_eq!(component.input_error_message, "Username cannot be empty.");
    }

    #[test]
    fn repeated_submission_navigates_each_time() {
        let mut mock = MockNavigator::new();
        expect_user_navigation(&mut mock, "lk", 2);

        let mut component = SearchComponent::new(mock);
        component.on_input("lk");
        submit(&mut component);
        submit(&mut component);
    }

    #[test]
    fn untrimmed_value_is_the_route_parameter() {
        let mut mock = MockNavigator::new();
        expect_user_navigation(&mut mock, "  lk ", 1);

        let mut component = SearchComponent::new(mock);
        component.on_input("  lk ");
        submit(&mut component);
        assert!(!component.is_input_error);
    }

    #[test]
    fn success_clears_previous_error() {
        let mut mock = MockNavigator::new();
        expect_user_navigation(&mut mock, "lk", 1);

        let mut component = SearchComponent::new(mock);
        component.on_input("");
        submit(&mut component);
        assert!(component.is_input_error);

        component.on_input("lk");
        submit(&mut component);
        assert!(!component.is_input_error);
        assert_eq!(component.input_error_message, "");
    }

    #[test]
    fn input_binding_stores_exact_value() {
        let mut component = SearchComponent::new(no_navigation());
        component.on_input(" a b\t");
        assert_eq!(component.search_query, " a b\t");
    }

    proptest! {
        #[test]
        fn blank_input_never_navigates(s in "[ \t\n\r]{0,12}") {
            let mut component = SearchComponent::new(no_navigation());
            component.on_input(s);
            submit(&mut component);

            prop_assert!(component.is_input_error);
            prop_assert_eq!(component.input_error_message.as_str(), "Username cannot be empty.");
        }

        #[test]
        fn inner_space_never_navigates(
            head in "[a-z0-9]{1,8}",
            tail in "[a-z0-9]{1,8}",
            pad in " {0,3}",
        ) {
            let mut component = SearchComponent::new(no_navigation());
            component.on_input(format!("{pad}{head} {tail}{pad}"));
            submit(&mut component);

            prop_assert!(component.is_input_error);
            prop_assert_eq!(component.input_error_message.as_str(), "Username contains space.");
        }

        #[test]
        fn space_free_input_navigates_with_original(
            name in "[a-zA-Z0-9_-]{1,16}",
            pad in " {0,3}",
        ) {
            let original = format!("{pad}{name}{pad}");
            let expected = original.clone();

            let mut mock = MockNavigator::new();
            mock.expect_navigate()
                .withf(move |commands, extras| {
                    commands.len() == 2
                        && commands[0] == "/user"
                        && commands[1] == expected
                        && extras.query_params.get("page") == Some("1")
                        && extras.query_params.get("per_page") == Some("10")
                })
                .times(1)
                .return_const(());

            let mut component = SearchComponent::new(mock);
            component.on_input(original);
            submit(&mut component);

            prop_assert!(!component.is_input_error);
            prop_assert_eq!(component.input_error_message.as_str(), "");
        }
    }
}
