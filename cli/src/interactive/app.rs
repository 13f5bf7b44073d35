//! Root application component
//!
//! Owns every key binding and wires the router and config around the nav
//! bar, page outlet, and status bar. Route state lives in the core router;
//! the component mirrors it into UI state through a subscription.

use anyhow::Result;
use iocraft::prelude::*;
use refibe_core::checks;
use refibe_core::content::{self, Action, NAV_LINKS};
use refibe_core::routes::{route_of_fragment, RouteMatch};
use refibe_core::{Router, SiteConfig};

use super::components::{NavBar, StatusBar};
use super::pages::{block_count, outlet};

/// Handles shared by the component tree.
#[derive(Clone, Default)]
pub struct AppContext {
    pub router: Router,
    pub config: SiteConfig,
}

#[derive(Clone, Props)]
pub struct SiteAppProps {
    pub context: AppContext,
}

impl Default for SiteAppProps {
    fn default() -> Self {
        Self {
            context: AppContext::default(),
        }
    }
}

/// Open the interactive site and block until the user quits.
pub async fn run_site(config: SiteConfig, start_route: Option<String>) -> Result<()> {
    let router = match start_route.as_deref() {
        Some(route) => Router::starting_at(route),
        None => Router::new(),
    };

    if config.dev_checks {
        checks::run(&router.current_route()).log();
    }

    let context = AppContext { router, config };
    element!(SiteApp(context: context)).render_loop().await?;
    Ok(())
}

/// Main site application component
#[component]
fn SiteApp(mut hooks: Hooks, props: &SiteAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let fragment = hooks.use_state(|| props.context.router.current_fragment());
    // Nav slot under the cursor: 0 is the wordmark, 1..=5 the links.
    let selected = hooks.use_state(|| 0usize);
    let scroll = hooks.use_state(|| 0usize);
    let notice = hooks.use_state(|| None::<String>);
    let prompt = hooks.use_state(|| None::<String>);
    let should_exit = hooks.use_state(|| false);

    // Mirror router changes into UI state
    let router_sub = props.context.router.clone();
    let dev_checks = props.context.config.dev_checks;
    let mut fragment_sub = fragment;
    let mut scroll_sub = scroll;
    let mut notice_sub = notice;
    hooks.use_future(async move {
        let mut rx = router_sub.subscribe();
        while let Ok(change) = rx.recv().await {
            if dev_checks {
                checks::run(&change.route()).log();
            }
            fragment_sub.set(change.fragment.clone());
            scroll_sub.set(0);
            notice_sub.set(None);
        }
    });

    // Handle terminal events
    hooks.use_terminal_events({
        let router = props.context.router.clone();
        let mailto = props.context.config.mailto();
        let fragment = fragment;
        let mut selected = selected;
        let mut scroll = scroll;
        let mut notice = notice;
        let mut prompt = prompt;
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => {
                // The go-to prompt grabs the keyboard while open. Clone out
                // of the state first so the read borrow ends before set.
                let open_prompt = prompt.read().clone();
                if let Some(buffer) = open_prompt {
                    match code {
                        KeyCode::Esc => prompt.set(None),
                        KeyCode::Enter => {
                            let target = buffer.trim().to_string();
                            if !target.is_empty() {
                                router.set_fragment(&target);
                            }
                            prompt.set(None);
                        }
                        KeyCode::Backspace => {
                            let mut buffer = buffer;
                            buffer.pop();
                            prompt.set(Some(buffer));
                        }
                        KeyCode::Char(c) => {
                            let mut buffer = buffer;
                            buffer.push(c);
                            prompt.set(Some(buffer));
                        }
                        _ => {}
                    }
                    return;
                }

                match code {
                    KeyCode::Char('q') => should_exit.set(true),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        should_exit.set(true);
                    }
                    KeyCode::Left => selected.set(selected.get().saturating_sub(1)),
                    KeyCode::Right => selected.set((selected.get() + 1).min(NAV_LINKS.len())),
                    KeyCode::Enter => {
                        if selected.get() == 0 {
                            router.navigate("/");
                        } else {
                            router.navigate(NAV_LINKS[selected.get() - 1].route.path());
                        }
                    }
                    KeyCode::Up => scroll.set(scroll.get().saturating_sub(1)),
                    KeyCode::Down => {
                        let matched = RouteMatch::resolve(&route_of_fragment(&fragment.read()));
                        let last = block_count(&matched).saturating_sub(1);
                        scroll.set((scroll.get() + 1).min(last));
                    }
                    KeyCode::PageUp => scroll.set(0),
                    KeyCode::PageDown => {
                        let matched = RouteMatch::resolve(&route_of_fragment(&fragment.read()));
                        scroll.set(block_count(&matched).saturating_sub(1));
                    }
                    KeyCode::Char('b') => {
                        router.back();
                    }
                    KeyCode::Char('f') => {
                        router.forward();
                    }
                    KeyCode::Char('g') => prompt.set(Some(String::new())),
                    KeyCode::Esc => notice.set(None),
                    KeyCode::Char('0') => {
                        router.navigate("/");
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        let route = route_of_fragment(&fragment.read());
                        if let RouteMatch::Page(route) = RouteMatch::resolve(&route) {
                            let key = c as u8 - b'0';
                            let cta = content::actions_for(route)
                                .into_iter()
                                .find(|cta| cta.key == key);
                            if let Some(cta) = cta {
                                match cta.action {
                                    Action::Go(target) => {
                                        router.navigate(target.path());
                                    }
                                    Action::Explore => scroll.set(1),
                                    Action::Contact => {
                                        notice.set(Some(format!("Contact: {}", mailto)));
                                    }
                                    Action::RequestWhitepaper => {
                                        notice.set(Some(
                                            "Requested: Security Whitepaper".to_string(),
                                        ));
                                    }
                                    Action::RequestCertificates => {
                                        notice.set(Some(
                                            "Requested: Sample Certificates".to_string(),
                                        ));
                                    }
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let current_fragment = fragment.read().clone();
    let matched = RouteMatch::resolve(&route_of_fragment(&current_fragment));

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            NavBar(
                fragment: current_fragment,
                selected: selected.get(),
                can_back: props.context.router.can_go_back(),
                can_forward: props.context.router.can_go_forward(),
            )
            View(flex_grow: 1.0) {
                #(outlet(&matched, scroll.get()))
            }
            StatusBar(notice: notice.read().clone(), prompt: prompt.read().clone())
        }
    }
}
