//! Form element handles injected into the widget
//!
//! The widget never touches a real page. The host injects a handle for the
//! source ("question") control and one for the dependent ("selected option")
//! control, which keeps the whole component exercisable without a browser.

use optsync_types::{OptionSet, QuestionId};

/// Read side of the source control.
pub trait SourceElement: Send + Sync {
    /// Current value of the control; `None` when nothing is selected.
    fn value(&self) -> Option<QuestionId>;
}

/// Dependent control whose entries the widget replaces wholesale.
pub trait OptionsTarget: Send {
    /// Drop all current entries and install `options` in the given order.
    ///
    /// Called only after a successful, still-current lookup. An empty
    /// selection or a stale response never reaches this method.
    fn replace_options(&mut self, options: &OptionSet);
}

/// Type-erased target for dynamic dispatch
pub type BoxedTarget = Box<dyn OptionsTarget>;

impl OptionsTarget for OptionSet {
    fn replace_options(&mut self, options: &OptionSet) {
        *self = options.clone();
    }
}
