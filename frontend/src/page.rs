use gloo_console::error;
use gloo_utils::window;
use workout_tracker_lib::{summary::ListEntry, surface::PageSurface, WorkoutForm};

/// Everything on the page besides the map.
#[derive(Debug, Default)]
pub struct PageState {
    pub entries: Vec<ListEntry>,
    pub form: WorkoutForm,
    pub form_visible: bool,
    /// Set after a submit, keeps the form out of the layout while it slides away.
    pub form_settling: bool,
    pub focus_pending: bool,
}

impl PageSurface for PageState {
    fn render_list_item(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }

    fn show_form(&mut self) {
        self.form_visible = true;
        self.focus_pending = true;
    }

    fn hide_form(&mut self) {
        self.form.clear();
        self.form_visible = false;
        self.form_settling = true;
    }

    fn reload(&mut self) {
        if let Err(err) = window().location().reload() {
            error!(format!("Failed to reload: {err:?}"));
        }
    }
}
