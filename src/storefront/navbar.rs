//! Top navigation bar shared by every page.

use super::Route;

/// Brand shown at the left of the bar, links home.
pub const BRAND: &str = "Fresh Basket";

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Link text
    pub name: &'static str,
    /// Destination
    pub route: Route,
}

/// Navbar state. Only the collapsible mobile menu is stateful.
#[derive(Debug, Clone, Default)]
pub struct Navbar {
    menu_open: bool,
}

impl Navbar {
    /// A navbar with the mobile menu closed.
    #[must_use]
    pub const fn new() -> Self {
        Self { menu_open: false }
    }

    /// Links shown in both the desktop bar and the mobile menu.
    #[must_use]
    pub fn menu_items() -> Vec<MenuItem> {
        vec![
            MenuItem {
                name: "Home",
                route: Route::Home,
            },
            MenuItem {
                name: "Products",
                route: Route::Products,
            },
            MenuItem {
                name: "About",
                route: Route::About,
            },
        ]
    }

    /// Destination of the cart icon.
    #[must_use]
    pub const fn cart_route() -> Route {
        Route::Cart
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Opens the mobile menu if closed, closes it if open.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Follows a menu link. Choosing a link closes the mobile menu.
    pub fn select(&mut self, item: &MenuItem) -> Route {
        self.close_menu();
        item.route.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items() {
        let items = Navbar::menu_items();
        let names: Vec<&str> = items.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Home", "Products", "About"]);
        assert_eq!(items[1].route.path(), "/products");
        assert_eq!(Navbar::cart_route().path(), "/cart");
    }

    #[test]
    fn test_toggle_and_select_close_menu() {
        let mut navbar = Navbar::new();
        assert!(!navbar.is_menu_open());

        navbar.toggle_menu();
        assert!(navbar.is_menu_open());

        let items = Navbar::menu_items();
        let route = navbar.select(&items[1]);
        assert_eq!(route, Route::Products);
        assert!(!navbar.is_menu_open());

        navbar.toggle_menu();
        navbar.toggle_menu();
        assert!(!navbar.is_menu_open());
    }
}
