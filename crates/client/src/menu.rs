use shared_types::ServiceCategory;

use crate::session::CartSession;

/// Open/closed state of the mobile menu and the services dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggles {
    pub menu_open: bool,
    pub dropdown_open: bool,
}

impl MenuToggles {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }
}

/// Apply a dropdown selection: the shared context's active category
/// becomes exactly `category`, and both the dropdown and the mobile menu
/// close. Nothing is fetched; the listing view reads the filter itself.
pub fn select_category<C>(toggles: &mut MenuToggles, cart: &mut C, category: ServiceCategory)
where
    C: CartSession + ?Sized,
{
    cart.set_search_by_category(category);
    toggles.dropdown_open = false;
    toggles.menu_open = false;
    tracing::debug!(category = category.as_str(), "category selected");
}
