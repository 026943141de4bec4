//! The floating trigger and the share dialog.

use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::config::{ElementIds, WidgetConfig};
use crate::dom::{self, KeydownListener};
use crate::platforms::{PlatformDescriptor, PLATFORMS};
use crate::share::share_message;
use crate::state::{click_origin, FocusTarget, WidgetAction, WidgetModel};

pub const WIDGET_LABEL: &str = "Broadcast the Truth";
const WIDGET_ICON: &str = "📡";
const CLOSE_GLYPH: &str = "✕";

#[derive(Properties, PartialEq, Default)]
pub struct WidgetProps {
    #[prop_or_default]
    pub config: WidgetConfig,
}

#[function_component(BroadcastWidget)]
pub fn broadcast_widget(props: &WidgetProps) -> Html {
    let model = use_reducer_eq(WidgetModel::default);
    let ids = use_memo(props.config.id_prefix.clone(), |prefix| ElementIds::new(prefix));

    let trigger_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let close_ref = use_node_ref();

    // --- focus follows each transition ---
    {
        let trigger_ref = trigger_ref.clone();
        let close_ref = close_ref.clone();
        use_effect_with(model.focus_request, move |request| {
            if let Some(request) = request {
                match request.target {
                    FocusTarget::CloseControl => dom::focus_node(&close_ref),
                    FocusTarget::Trigger => dom::focus_node(&trigger_ref),
                }
            }
            || {}
        });
    }

    // --- Escape anywhere in the document ---
    {
        let dispatcher = model.dispatcher();
        use_effect_with((), move |_| {
            let listener = dom::document().and_then(|document| {
                KeydownListener::attach(document.into(), move |ev: KeyboardEvent| {
                    dispatcher.dispatch(WidgetAction::KeyPressed(ev.key()));
                })
            });
            if let Err(err) = &listener {
                log::warn!("keyboard dismissal unavailable: {}", err);
            }
            move || drop(listener)
        });
    }

    let on_trigger = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WidgetAction::TriggerClicked))
    };

    let on_close = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WidgetAction::CloseClicked))
    };

    let on_overlay = {
        let dispatcher = model.dispatcher();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            let overlay = overlay_ref.cast::<Element>();
            let origin = click_origin(target.as_ref(), overlay.as_ref());
            dispatcher.dispatch(WidgetAction::OverlayClicked(origin));
        })
    };

    let overlay_class = classes!("bp-modal-overlay", model.state.is_open().then_some("open"));

    html! {
        <>
            <div
                id={ids.overlay.clone()}
                class={overlay_class}
                role="dialog"
                aria-modal="true"
                aria-label={WIDGET_LABEL}
                ref={overlay_ref}
                onclick={on_overlay}
            >
                <div id={ids.modal.clone()} class="bp-modal">
                    <button
                        id={ids.close.clone()}
                        class="bp-modal-close"
                        type="button"
                        aria-label="Close"
                        ref={close_ref}
                        onclick={on_close}
                    >
                        { CLOSE_GLYPH }
                    </button>
                    <div class="bp-modal-title">{ format!("{WIDGET_ICON} {WIDGET_LABEL}") }</div>
                    <div class="bp-modal-msg">{ share_message().as_str() }</div>
                    { for PLATFORMS.iter().map(share_row) }
                </div>
            </div>
            <button
                id={ids.trigger.clone()}
                class="bp-float-btn"
                type="button"
                aria-label={WIDGET_LABEL}
                ref={trigger_ref}
                onclick={on_trigger}
            >
                <span>{ WIDGET_ICON }</span>
                <span>{ WIDGET_LABEL }</span>
            </button>
        </>
    }
}

fn share_row(platform: &PlatformDescriptor) -> Html {
    html! {
        <a
            key={platform.id}
            class="bp-share-btn"
            href={platform.share_url()}
            target="_blank"
            rel="noopener noreferrer"
            data-platform={platform.id}
        >
            <span>{ platform.icon }</span>
            <span>{ format!("Share on {}", platform.label) }</span>
        </a>
    }
}
