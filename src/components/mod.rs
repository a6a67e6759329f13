//! App-shell components: route guards and lazy page frames.

mod lazy_page;
mod protected_route;
mod scroll_top;

pub use lazy_page::{LazyPage, PageLoading};
pub use protected_route::ProtectedRoute;
pub use scroll_top::ScrollToTop;
