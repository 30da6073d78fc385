use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// - Props come in as struct fields (`TitleBar`, `TabBar`).
/// - Components with widget state borrow it from `TuiState` each frame
///   (`ChapterList`, `SectionList`, `Reading`).
/// - Rendering targets a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component can update internal widget
/// state during the pass — list offsets, scroll positions — which is what
/// ratatui's `StatefulWidget` machinery expects.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
///
/// Only the reading view implements this today: it absorbs scroll events
/// into its `ScrollViewState`. List cursors are core state and move through
/// actions instead.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
