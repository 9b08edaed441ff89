//! Page navigation seam.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use leptos_router::NavigateOptions;

/// Changes the currently displayed view.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Adapter over the function returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
