use std::cell::RefCell;
use std::rc::Rc;

pub const LOGIN_PATH: &str = "/login";

/// Full-page navigation. The browser implementation drives `window.location`.
pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn current_query(&self) -> Option<String>;
    fn navigate(&self, path: &str);
}

/// Sends the user to the login screen unless they are already there.
pub fn redirect_to_login(navigator: &dyn Navigator) {
    if navigator.current_path().as_deref() == Some(LOGIN_PATH) {
        return;
    }
    log::info!("redirecting to {}", LOGIN_PATH);
    navigator.navigate(LOGIN_PATH);
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    fn current_query(&self) -> Option<String> {
        web_sys::window()?.location().search().ok()
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::warn!("failed to navigate to {}", path);
            }
        }
    }
}

/// Navigator without a browser: it remembers where the app tried to go.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    location: RefCell<Option<String>>,
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let nav = Self::default();
        *nav.location.borrow_mut() = Some(path.to_string());
        nav
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<String> {
        self.location
            .borrow()
            .as_deref()
            .map(|loc| loc.split('?').next().unwrap_or_default().to_string())
    }

    fn current_query(&self) -> Option<String> {
        self.location
            .borrow()
            .as_deref()
            .and_then(|loc| loc.find('?').map(|idx| loc[idx..].to_string()))
    }

    fn navigate(&self, path: &str) {
        *self.location.borrow_mut() = Some(path.to_string());
        self.visits.borrow_mut().push(path.to_string());
    }
}

pub fn default_navigator() -> Rc<dyn Navigator> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserNavigator)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(RecordingNavigator::default())
    }
}

/// Looks up a single query parameter (`?a=1&b=2`), percent-decoded.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_encoding::percent_decode_str(&value)
                .decode_utf8_lossy()
                .into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_skips_when_already_on_login() {
        let nav = RecordingNavigator::at("/login?next=%2Frequests");
        redirect_to_login(&nav);
        assert!(nav.visits().is_empty());

        let nav = RecordingNavigator::at("/requests");
        redirect_to_login(&nav);
        assert_eq!(nav.visits(), vec!["/login".to_string()]);
    }

    #[test]
    fn query_param_decodes_values() {
        let query = "?code=abc%2F123&state=x+y&flag";
        assert_eq!(query_param(query, "code").as_deref(), Some("abc/123"));
        assert_eq!(query_param(query, "state").as_deref(), Some("x y"));
        assert_eq!(query_param(query, "flag").as_deref(), Some(""));
        assert_eq!(query_param(query, "missing"), None);
    }

    #[test]
    fn recording_navigator_splits_path_and_query() {
        let nav = RecordingNavigator::at("/oauth2/callback?code=1");
        assert_eq!(nav.current_path().as_deref(), Some("/oauth2/callback"));
        assert_eq!(nav.current_query().as_deref(), Some("?code=1"));
    }
}
