//! Inline SVG icons, 24x24 stroke style. Color follows `currentColor` so the
//! surrounding CSS decides it.

use yew::prelude::*;

use crate::content::StatIcon;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(WavesIcon)]
pub fn waves_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M2 6c.6.5 1.2 1 2.5 1C7 7 7 5 9.5 5c2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1" />
            <path d="M2 12c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1" />
            <path d="M2 18c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1" />
        </svg>
    }
}

#[function_component(UsersIcon)]
pub fn users_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
            <path d="M16 3.13a4 4 0 0 1 0 7.75" />
        </svg>
    }
}

#[function_component(CalendarIcon)]
pub fn calendar_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="3" y="4" width="18" height="18" rx="2" />
            <path d="M16 2v4" />
            <path d="M8 2v4" />
            <path d="M3 10h18" />
        </svg>
    }
}

#[function_component(ClockIcon)]
pub fn clock_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" />
        </svg>
    }
}

#[function_component(HeartIcon)]
pub fn heart_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
        </svg>
    }
}

#[function_component(MapPinIcon)]
pub fn map_pin_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </svg>
    }
}

#[function_component(MailIcon)]
pub fn mail_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </svg>
    }
}

#[function_component(PhoneIcon)]
pub fn phone_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        </svg>
    }
}

#[function_component(ChevronDownIcon)]
pub fn chevron_down_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="m6 9 6 6 6-6" />
        </svg>
    }
}

#[function_component(FacebookIcon)]
pub fn facebook_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="currentColor" stroke="none">
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
        </svg>
    }
}

#[function_component(InstagramIcon)]
pub fn instagram_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="2" y="2" width="20" height="20" rx="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <path d="M17.5 6.5h.01" />
        </svg>
    }
}

#[function_component(TwitterIcon)]
pub fn twitter_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="currentColor" stroke="none">
            <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
        </svg>
    }
}

/// Render the icon a stat card asks for.
pub fn stat_icon(icon: StatIcon, class: &'static str) -> Html {
    match icon {
        StatIcon::Users => html! { <UsersIcon class={class} /> },
        StatIcon::Calendar => html! { <CalendarIcon class={class} /> },
        StatIcon::Waves => html! { <WavesIcon class={class} /> },
        StatIcon::MapPin => html! { <MapPinIcon class={class} /> },
    }
}
