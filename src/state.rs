//! Open/closed state machine for the share dialog, independent of any rendering surface.

use std::rc::Rc;

use yew::Reducible;

/// Visibility of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

impl WidgetState {
    pub fn is_open(self) -> bool {
        matches!(self, WidgetState::Open)
    }
}

/// Where a click on the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The dimmed backdrop itself.
    Backdrop,
    /// Anything inside the dialog body.
    ModalBody,
}

/// Classifies an overlay click: only a click whose target is the overlay itself hits the backdrop.
pub fn click_origin<T: PartialEq>(target: Option<&T>, overlay: Option<&T>) -> ClickOrigin {
    match (target, overlay) {
        (Some(target), Some(overlay)) if target == overlay => ClickOrigin::Backdrop,
        _ => ClickOrigin::ModalBody,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// The floating trigger was activated.
    TriggerClicked,
    /// The dialog's close control was activated.
    CloseClicked,
    OverlayClicked(ClickOrigin),
    /// A `keydown` anywhere in the document, carrying `KeyboardEvent.key`.
    KeyPressed(String),
}

/// Element that should receive keyboard focus after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    CloseControl,
    Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: WidgetState,
    pub focus: Option<FocusTarget>,
}

impl Transition {
    fn stay(state: WidgetState) -> Self {
        Self { state, focus: None }
    }
}

/// Computes the next state and the focus move for `action`.
///
/// Close intents while already closed leave both state and focus untouched.
pub fn transition(state: WidgetState, action: &WidgetAction) -> Transition {
    match action {
        WidgetAction::TriggerClicked => Transition {
            state: WidgetState::Open,
            focus: Some(FocusTarget::CloseControl),
        },
        WidgetAction::CloseClicked | WidgetAction::OverlayClicked(ClickOrigin::Backdrop) => {
            close(state)
        }
        WidgetAction::KeyPressed(key) if key == "Escape" => close(state),
        WidgetAction::OverlayClicked(ClickOrigin::ModalBody) | WidgetAction::KeyPressed(_) => {
            Transition::stay(state)
        }
    }
}

fn close(state: WidgetState) -> Transition {
    match state {
        WidgetState::Open => Transition {
            state: WidgetState::Closed,
            focus: Some(FocusTarget::Trigger),
        },
        WidgetState::Closed => Transition::stay(state),
    }
}

/// A focus move tagged with a sequence number so repeated moves to the same
/// target are still observed as distinct requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub target: FocusTarget,
    pub seq: u32,
}

/// Reducer-held model backing the widget component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetModel {
    pub state: WidgetState,
    pub focus_request: Option<FocusRequest>,
}

impl WidgetModel {
    pub fn apply(&self, action: &WidgetAction) -> Option<WidgetModel> {
        let next = transition(self.state, action);
        let focus = next.focus?;
        let seq = self
            .focus_request
            .map(|request| request.seq.wrapping_add(1))
            .unwrap_or(0);
        Some(WidgetModel {
            state: next.state,
            focus_request: Some(FocusRequest { target: focus, seq }),
        })
    }
}

impl Reducible for WidgetModel {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(&action) {
            Some(next) => {
                log::debug!("widget {:?} -> {:?} on {:?}", self.state, next.state, action);
                Rc::new(next)
            }
            None => self,
        }
    }
}
