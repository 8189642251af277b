//! Handing a located definition to the host UI.

use crate::{locate, ClickPosition, LookupFailure, TargetIdentifier};

/// Host-side hook that scrolls an explorer node into view.
///
/// Implementations return `false` when no element matches the selector;
/// that is not an error, the explorer may simply not show the node yet.
pub trait Navigator {
    fn scroll_into_view(&mut self, selector: &str) -> bool;
}

impl<F> Navigator for F
where
    F: FnMut(&str) -> bool,
{
    fn scroll_into_view(&mut self, selector: &str) -> bool {
        self(selector)
    }
}

/// Locate the definition under `click` and ask `navigator` to reveal it.
///
/// Lookup failures are logged and returned; no navigation happens for them.
pub fn inspect(
    document_text: &str,
    click: ClickPosition,
    navigator: &mut dyn Navigator,
) -> Result<TargetIdentifier, LookupFailure> {
    match locate(document_text, click) {
        Ok(target) => {
            let selector = target.explorer_selector();
            if !navigator.scroll_into_view(&selector) {
                tracing::debug!(%selector, "No explorer node matches selector");
            }
            Ok(target)
        }
        Err(failure) => {
            tracing::warn!(error = %failure, "Inspect operation skipped");
            Err(failure)
        }
    }
}
