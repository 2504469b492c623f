//! Home page: 3D monster, welcome text, message board, and composer modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The page owns exactly one piece of state, the
//! composer modal lifecycle. The fixed part of the page is described by
//! `HomeScreen::sections`, resolved once from the page inputs; the composer
//! is mounted only while `ComposerState::Open`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::message_board::MessageBoard;
use crate::components::message_sender_modal::MessageSenderModal;
use crate::components::monster_profile::Monster3DProfile;
use crate::components::page_container::PageContainer;
use crate::config::PageConfig;
use crate::monsters::{ModelError, ProfileView};
use crate::state::composer::ComposerState;

/// Creature shown on the home page (the Devil).
pub const HOME_MONSTER_TYPE_ID: u32 = 105;

/// Label of the call-to-action that opens the composer.
pub const COMPOSE_CTA_LABEL: &str = "Send a message";

/// One always-rendered element of the home page, in display order.
#[derive(Clone, Debug, PartialEq)]
pub enum HomeSection {
    Profile(ProfileView),
    Welcome(String),
    MessageBoard,
    ComposeAction,
}

/// Fixed home page inputs: welcome text and the resolved monster profile.
#[derive(Clone, Debug)]
pub struct HomeScreen {
    welcome: String,
    profile: ProfileView,
}

impl HomeScreen {
    /// Resolve the page inputs for the home monster.
    pub fn new(config: &PageConfig) -> Result<Self, ModelError> {
        Self::for_monster(config, HOME_MONSTER_TYPE_ID)
    }

    /// Resolve the page inputs for `type_id`. A missing catalog entry is
    /// returned to the caller, never replaced by another creature.
    pub fn for_monster(config: &PageConfig, type_id: u32) -> Result<Self, ModelError> {
        let profile = ProfileView::idle(type_id)?;
        Ok(Self { welcome: config.welcome.clone(), profile })
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn profile(&self) -> &ProfileView {
        &self.profile
    }

    /// Sections rendered regardless of composer state.
    pub fn sections(&self) -> Vec<HomeSection> {
        vec![
            HomeSection::Profile(self.profile.clone()),
            HomeSection::Welcome(self.welcome.clone()),
            HomeSection::MessageBoard,
            HomeSection::ComposeAction,
        ]
    }
}

/// Home page route component.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let screen = HomeScreen::new(&config).map(|screen| view! { <HomeContent screen/> });

    view! {
        <PageContainer>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div class="home-error">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| {
                                    log::error!("home page failed to render: {e}");
                                    view! { <p class="home-error__message">{e.to_string()}</p> }
                                })
                                .collect_view()
                        }}
                    </div>
                }
            }>{screen}</ErrorBoundary>
        </PageContainer>
    }
}

#[component]
fn HomeContent(screen: HomeScreen) -> impl IntoView {
    let composer = RwSignal::new(ComposerState::Closed);

    let on_compose = Callback::new(move |()| {
        composer.update(|c| *c = c.open());
        log::debug!("message composer opened");
    });
    let on_close = Callback::new(move |()| {
        composer.update(|c| *c = c.close());
        log::debug!("message composer closed");
    });

    let fixed = screen
        .sections()
        .into_iter()
        .map(|section| render_section(section, on_compose))
        .collect_view();

    view! {
        {fixed}
        <Show when=move || composer.get().is_open()>
            <MessageSenderModal close_modal=on_close/>
        </Show>
    }
}

fn render_section(section: HomeSection, on_compose: Callback<()>) -> AnyView {
    match section {
        HomeSection::Profile(profile) => view! {
            <div class="home-profile">
                <Monster3DProfile profile/>
            </div>
        }
        .into_any(),
        HomeSection::Welcome(text) => view! { <p class="home-monster">{text}</p> }.into_any(),
        HomeSection::MessageBoard => view! { <MessageBoard/> }.into_any(),
        HomeSection::ComposeAction => view! {
            <p class="home-compose" on:click=move |_| on_compose.run(())>
                {COMPOSE_CTA_LABEL}
            </p>
        }
        .into_any(),
    }
}
