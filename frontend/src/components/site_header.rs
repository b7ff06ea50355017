use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{MENU_BUTTON_ID, MOBILE_NAV_ID};
use crate::dom::{self, ListenerGuard};
use crate::navigation::{NavEvent, NavState};
use crate::Route;

impl Reducible for NavState {
    type Action = NavEvent;

    fn reduce(self: Rc<Self>, action: NavEvent) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Услуги", href: "/#services" },
        NavLink { label: "Цифры", href: "/#insights" },
        NavLink { label: "Как работаем", href: "/#process" },
        NavLink { label: "Заявка", href: "/#contact" },
    ]
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    #[prop_or_else(default_links)]
    pub links: Vec<NavLink>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let nav = use_reducer_eq(NavState::default);
    // no links means no panel, and the menu stays inert
    let has_panel = !props.links.is_empty();

    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |has_panel| {
                let mut guard = ListenerGuard::new();
                if *has_panel {
                    if let Ok(window) = dom::window() {
                        let viewport = window.clone();
                        guard.listen(window.as_ref(), "resize", move |_| {
                            if let Some(width) = viewport.inner_width().ok().and_then(|w| w.as_f64()) {
                                nav.dispatch(NavEvent::Resized { width });
                            }
                        });
                    }
                }
                move || drop(guard)
            },
            has_panel,
        );
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavEvent::Toggle))
    };

    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavEvent::LinkClicked))
    };

    let desktop_links = props.links.iter().map(|link| html! {
        <a class="nav-link" href={link.href}>{link.label}</a>
    });

    let panel_links = props.links.iter().map(|link| html! {
        <a class="mobile-nav-link" href={link.href} onclick={close_menu.clone()}>{link.label}</a>
    });

    html! {
        <header class="site-header">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Премиум Ремонт"}
                </Link<Route>>
                <nav class="nav-desktop" aria-label="Основная навигация">
                    { for desktop_links }
                </nav>
                {
                    if has_panel {
                        html! {
                            <button
                                id={MENU_BUTTON_ID}
                                class="burger-menu"
                                type="button"
                                aria-controls={MOBILE_NAV_ID}
                                aria-expanded={nav.aria_expanded()}
                                aria-label="Меню"
                                onclick={toggle_menu}
                            >
                                <span></span>
                                <span></span>
                                <span></span>
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if has_panel {
                    html! {
                        <nav id={MOBILE_NAV_ID} class="mobile-nav" hidden={nav.panel_hidden()}>
                            { for panel_links }
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={Route::Privacy} classes="mobile-nav-link">
                                    {"Политика конфиденциальности"}
                                </Link<Route>>
                            </div>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
