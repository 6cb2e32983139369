// ============================================================================
// NAV STATE - Current view + mobile menu flag (never persisted)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::routing::View;

#[derive(Clone)]
pub struct NavState {
    current_view: Rc<RefCell<View>>,
    menu_open: Rc<RefCell<bool>>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            current_view: Rc::new(RefCell::new(View::Home)),
            menu_open: Rc::new(RefCell::new(false)),
        }
    }

    pub fn current_view(&self) -> View {
        *self.current_view.borrow()
    }

    pub fn set_view(&self, view: View) {
        *self.current_view.borrow_mut() = view;
    }

    pub fn is_menu_open(&self) -> bool {
        *self.menu_open.borrow()
    }

    pub fn set_menu_open(&self, open: bool) {
        *self.menu_open.borrow_mut() = open;
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}
