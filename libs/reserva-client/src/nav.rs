use parking_lot::RwLock;

/// Route of the login screen.
///
/// A 401 outside this route redirects here after the session is cleared.
pub const LOGIN_ROUTE: &str = "/login";

/// Host routing capability.
///
/// The gateway needs exactly two things from the host's router: the path of
/// the screen currently shown, and a way to send the user somewhere else.
pub trait Navigator: Send + Sync {
    /// Path of the screen currently shown, e.g. `/perfil`.
    fn current_path(&self) -> String;

    /// Fire-and-forget redirect to `path`.
    fn navigate_to(&self, path: &str);
}

/// In-memory [`Navigator`] for native hosts and tests.
///
/// Records the last navigated path and reports it as the current one.
pub struct MemoryNavigator {
    path: RwLock<String>,
}

impl MemoryNavigator {
    pub fn new(initial_path: &str) -> Self {
        Self {
            path: RwLock::new(initial_path.to_owned()),
        }
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.path.read().clone()
    }

    fn navigate_to(&self, path: &str) {
        *self.path.write() = path.to_owned();
    }
}
