use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard;
use crate::config::COPY_NOTICE_MS;

/// Whether the "Link copied" notice is up. Every copy gets a fresh ticket and
/// only the expiry carrying the current ticket may hide the notice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyNotice {
    pub visible: bool,
    ticket: u32,
}

pub enum CopyNoticeAction {
    Shown(u32),
    Expired(u32),
}

impl Reducible for CopyNotice {
    type Action = CopyNoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CopyNoticeAction::Shown(ticket) => Rc::new(Self { visible: true, ticket }),
            CopyNoticeAction::Expired(ticket) if ticket == self.ticket && self.visible => {
                Rc::new(Self { visible: false, ticket })
            }
            CopyNoticeAction::Expired(_) => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyLinkButtonProps {
    pub link: String,
}

#[function_component(CopyLinkButton)]
pub fn copy_link_button(props: &CopyLinkButtonProps) -> Html {
    let notice = use_reducer(CopyNotice::default);
    let tickets = use_mut_ref(|| 0u32);

    let on_copy = {
        let link = props.link.clone();
        let dispatcher = notice.dispatcher();
        let tickets = tickets.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let link = link.clone();
            let dispatcher = dispatcher.clone();
            let tickets = tickets.clone();
            spawn_local(async move {
                match clipboard::write_text(&link).await {
                    Ok(()) => {
                        info!("Copied share link to clipboard");
                        let ticket = {
                            let mut last = tickets.borrow_mut();
                            *last = last.wrapping_add(1);
                            *last
                        };
                        dispatcher.dispatch(CopyNoticeAction::Shown(ticket));
                        let timeout = Timeout::new(COPY_NOTICE_MS, move || {
                            dispatcher.dispatch(CopyNoticeAction::Expired(ticket));
                        });
                        timeout.forget();
                    }
                    Err(e) => error!("Failed to copy link: {}", e),
                }
            });
        })
    };

    html! {
        <button type="button" class={classes!("copy-button", notice.visible.then(|| "copied"))} onclick={on_copy}>
            { if notice.visible { "✓ Link copied!" } else { "Copy link" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: CopyNotice, action: CopyNoticeAction) -> CopyNotice {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_hidden() {
        assert!(!CopyNotice::default().visible);
    }

    #[test]
    fn expiry_hides_the_notice() {
        let shown = apply(CopyNotice::default(), CopyNoticeAction::Shown(1));
        assert!(shown.visible);
        let expired = apply(shown, CopyNoticeAction::Expired(1));
        assert!(!expired.visible);
    }

    #[test]
    fn stale_expiry_keeps_newer_notice() {
        let first = apply(CopyNotice::default(), CopyNoticeAction::Shown(1));
        let second = apply(first, CopyNoticeAction::Shown(2));
        let after_stale = apply(second, CopyNoticeAction::Expired(1));
        assert!(after_stale.visible);
        let after_current = apply(after_stale, CopyNoticeAction::Expired(2));
        assert!(!after_current.visible);
    }

    #[test]
    fn expiry_without_notice_is_a_no_op() {
        let state = apply(CopyNotice::default(), CopyNoticeAction::Expired(0));
        assert_eq!(state, CopyNotice::default());
    }
}
