use crate::{
    summary::{ListEntry, Marker},
    workout::Coordinates,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration_secs: f64,
}

/// A ready map. The controller only holds one after the map has loaded.
pub trait MapSurface {
    fn place_marker(&mut self, marker: &Marker);
    fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions);
}

/// The rest of the page: the workout list and the input form.
pub trait PageSurface {
    fn render_list_item(&mut self, entry: &ListEntry);
    /// Show the form and focus the distance input.
    fn show_form(&mut self);
    /// Clear the inputs and hide the form.
    fn hide_form(&mut self);
    /// Start over from a fresh page load.
    fn reload(&mut self);
}

#[cfg(test)]
pub(crate) mod recording {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        error::StorageError,
        storage::{KeyValueStore, MemoryStore},
    };

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Marker(Marker),
        View(Coordinates, f64, PanOptions),
        ListItem(ListEntry),
        ShowForm,
        HideForm,
        Reload,
        Stored,
        Removed,
    }

    /// Calls from every fake, in the order they happened.
    pub type CallLog = Rc<RefCell<Vec<Call>>>;

    #[derive(Debug, Default)]
    pub struct RecordingMap {
        pub log: CallLog,
    }

    impl MapSurface for RecordingMap {
        fn place_marker(&mut self, marker: &Marker) {
            self.log.borrow_mut().push(Call::Marker(marker.clone()));
        }

        fn set_view(&mut self, center: Coordinates, zoom: f64, pan: PanOptions) {
            self.log.borrow_mut().push(Call::View(center, zoom, pan));
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingPage {
        pub log: CallLog,
    }

    impl PageSurface for RecordingPage {
        fn render_list_item(&mut self, entry: &ListEntry) {
            self.log.borrow_mut().push(Call::ListItem(entry.clone()));
        }

        fn show_form(&mut self) {
            self.log.borrow_mut().push(Call::ShowForm);
        }

        fn hide_form(&mut self) {
            self.log.borrow_mut().push(Call::HideForm);
        }

        fn reload(&mut self) {
            self.log.borrow_mut().push(Call::Reload);
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingStore {
        pub inner: MemoryStore,
        pub log: CallLog,
        pub fail_writes: bool,
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write {
                    key: key.into(),
                    reason: "quota exceeded".into(),
                });
            }
            self.log.borrow_mut().push(Call::Stored);
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.log.borrow_mut().push(Call::Removed);
            self.inner.remove(key)
        }
    }
}
