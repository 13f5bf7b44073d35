//! Bottom status bar
//!
//! One line under the page: the go-to prompt while it is open, a notice
//! after contact or request CTAs, or the key hints.

use iocraft::prelude::*;

#[derive(Clone, Props)]
pub struct StatusBarProps {
    /// Transient message, cleared on navigation or Esc.
    pub notice: Option<String>,
    /// Go-to prompt buffer; `Some` while the prompt is open.
    pub prompt: Option<String>,
}

impl Default for StatusBarProps {
    fn default() -> Self {
        Self {
            notice: None,
            prompt: None,
        }
    }
}

const HINTS: &str =
    "←/→ + enter navigate · ↑/↓ scroll · 1-9 actions · g go to · b/f history · q quit";

#[component]
pub fn StatusBar(_hooks: Hooks, props: &StatusBarProps) -> impl Into<AnyElement<'static>> {
    if let Some(buffer) = &props.prompt {
        let prompt = format!("go to: {}█  (enter to open, esc to cancel)", buffer);
        return element! {
            View(padding_left: 1, padding_right: 1) {
                Text(content: prompt, color: Color::Cyan)
            }
        };
    }

    if let Some(notice) = &props.notice {
        return element! {
            View(padding_left: 1, padding_right: 1) {
                Text(content: notice.clone(), color: Color::Yellow, weight: Weight::Bold)
            }
        };
    }

    element! {
        View(padding_left: 1, padding_right: 1) {
            Text(content: HINTS, color: Color::DarkGrey)
        }
    }
}
