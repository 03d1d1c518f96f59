use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions};
use log::debug;

use crate::components::icons::{
    stat_icon, CalendarIcon, ClockIcon, FacebookIcon, HeartIcon, InstagramIcon, MailIcon,
    MapPinIcon, PhoneIcon, TwitterIcon, UsersIcon, WavesIcon,
};
use crate::components::nav::NavBar;
use crate::components::survey::SurveyEmbed;
use crate::config;
use crate::content::{impact_stats, upcoming_events, Section};
use crate::state::{FormField, NavState, VolunteerForm};

/// Smooth-scroll the viewport to a section element. A missing element is
/// tolerated silently.
fn scroll_to_section(section: Section) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(section.id()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Campaign)]
pub fn campaign() -> Html {
    let nav_state = use_state(NavState::default);
    let form = use_state(VolunteerForm::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let select_section = {
        let nav_state = nav_state.clone();
        Callback::from(move |section: Section| {
            debug!("section selected: {}", section.id());
            let mut next = *nav_state;
            next.select(section);
            nav_state.set(next);
            scroll_to_section(section);
        })
    };

    let toggle_menu = {
        let nav_state = nav_state.clone();
        Callback::from(move |_| {
            let mut next = *nav_state;
            next.toggle_menu();
            nav_state.set(next);
        })
    };

    // One oninput handler per text input, each replacing exactly its field.
    let edit_field = {
        let form = form.clone();
        move |field: FormField| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                next.set(field, input.value());
                form.set(next);
            })
        }
    };

    let edit_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(FormField::Message, textarea.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            debug!("volunteer application submitted");
            if let Some(window) = web_sys::window() {
                let _ = window
                    .alert_with_message("Thank you for your interest! Your application has been received.");
            }
            form.set(VolunteerForm::default());
        })
    };

    let cta = |section: Section, label: &'static str, class: &'static str| {
        let select = select_section.clone();
        html! {
            <button class={class} onclick={Callback::from(move |_| select.emit(section))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="campaign-page">
            <NavBar
                active={nav_state.active}
                menu_open={nav_state.menu_open}
                on_select={select_section.clone()}
                on_toggle={toggle_menu}
            />

            <section id="home" class="hero">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1>
                        {"Ayo Selamatkan"}
                        <span class="hero-accent">{"Pantai Kita"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Bergabunglah bersama kami dalam membersihkan pantai dan melindungi ekosistem laut untuk generasi mendatang."}
                    </p>
                    <div class="hero-cta-group">
                        { cta(Section::Volunteer, "Jadi Relawan", "cta-primary") }
                        { cta(Section::Events, "Liat Acara", "cta-secondary") }
                    </div>

                    <div class="stats-grid">
                        { for impact_stats().iter().map(|stat| html! {
                            <div class="stat-card">
                                { stat_icon(stat.icon, "stat-icon") }
                                <div class="stat-value">{ stat.value }</div>
                                <div class="stat-label">{ stat.label }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <h2>{"Tentang Misi Kami"}</h2>
                <div class="about-grid">
                    <div class="about-text">
                        <p>
                            {"Jaga Pantai adalah gerakan lingkungan yang berdedikasi untuk melindungi ekosistem pantai kita yang berharga. Kami menyelenggarakan acara bersih-bersih pantai secara rutin, menyatukan relawan yang peduli terhadap konservasi laut."}
                        </p>
                        <p>
                            {"Sejak didirikan, kami telah mengerahkan ribuan relawan untuk menghilangkan berton-ton sampah plastik dan puing-puing dari pantai kami. Namun, kami lebih dari sekadar tim bersih-bersih – kami adalah pendidik, advokat, dan pencinta laut yang berkomitmen untuk menciptakan perubahan."}
                        </p>
                        <div class="about-highlight">
                            <HeartIcon class="highlight-icon" />
                            <div>
                                <h3>{"Didorong Komunitas"}</h3>
                                <p>{"Didukung oleh relawan yang bersemangat dari berbagai latar belakang"}</p>
                            </div>
                        </div>
                        <div class="about-highlight">
                            <WavesIcon class="highlight-icon" />
                            <div>
                                <h3>{"Dampak Terukur"}</h3>
                                <p>{"Setiap pembersihan memberikan perbedaan nyata bagi kehidupan laut"}</p>
                            </div>
                        </div>
                    </div>
                    <div class="about-panel">
                        <WavesIcon class="panel-icon" />
                        <p class="panel-line">{"Bersama Kita Bisa"}</p>
                        <p class="panel-line-big">{"Menciptakan Laut yang Biru"}</p>
                    </div>
                </div>
            </section>

            <section id="events" class="events">
                <h2>{"Acara Mendatang"}</h2>
                <p class="section-intro">
                    {"Bergabunglah dengan kami di acara bersih-bersih pantai kami berikutnya. Semua tingkat keahlian diterima – kami menyediakan semua perlengkapan!"}
                </p>
                <div class="events-grid">
                    { for upcoming_events().iter().map(|event| html! {
                        <div class="event-card">
                            <div class="event-stripe"></div>
                            <div class="event-body">
                                <h3>{ event.title }</h3>
                                <div class="event-row">
                                    <CalendarIcon class="event-icon" />
                                    <span>{ event.date }</span>
                                </div>
                                <div class="event-row">
                                    <ClockIcon class="event-icon" />
                                    <span>{ event.time }</span>
                                </div>
                                <div class="event-row">
                                    <MapPinIcon class="event-icon" />
                                    <span>{ event.location }</span>
                                </div>
                                <div class="event-row">
                                    <UsersIcon class="event-icon" />
                                    <span>{ format!("{} relawan terdaftar", event.volunteers) }</span>
                                </div>
                                // Placeholder control, not wired to anything yet
                                <button class="event-signup">{"Daftar Sekarang"}</button>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="volunteer" class="volunteer">
                <h2>{"Menjadi Relawan"}</h2>
                <p class="section-intro">{"Bergabunglah dengan komunitas penjaga pantai kami"}</p>
                <form class="volunteer-form" onsubmit={on_submit}>
                    <div class="form-field">
                        <label for="full-name">{"Nama Lengkap"}</label>
                        <input
                            id="full-name"
                            type="text"
                            value={form.full_name.clone()}
                            oninput={edit_field(FormField::FullName)}
                        />
                    </div>
                    <div class="form-field">
                        <label for="email">{"Alamat Email"}</label>
                        <input
                            id="email"
                            type="email"
                            value={form.email.clone()}
                            oninput={edit_field(FormField::Email)}
                        />
                    </div>
                    <div class="form-field">
                        <label for="phone">{"Nomor Telepon"}</label>
                        <input
                            id="phone"
                            type="tel"
                            value={form.phone.clone()}
                            oninput={edit_field(FormField::Phone)}
                        />
                    </div>
                    <div class="form-field">
                        <label for="message">{"Mengapa anda ingin menjadi relawan?"}</label>
                        <textarea
                            id="message"
                            rows="4"
                            value={form.message.clone()}
                            oninput={edit_message}
                        />
                    </div>
                    <button type="submit" class="form-submit">{"Kirim Aplikasi"}</button>
                </form>
            </section>

            <section id="survey" class="survey">
                <h2>{"Bagikan Pendapat Anda"}</h2>
                <p class="section-intro">
                    {"Bantu kami meningkatkan upaya kami dengan mengisi survei singkat ini"}
                </p>
                <div class="survey-card">
                    <div class="survey-header">
                        <h3>{"Survey"}</h3>
                        <p>{"Suara anda sangat berarti bagi kami"}</p>
                    </div>
                    <SurveyEmbed
                        src={config::get_survey_embed_url()}
                        fallback_url={config::get_survey_fallback_url()}
                    />
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>{"Kontak Kami"}</h2>
                <div class="contact-grid">
                    <div class="contact-card">
                        <div class="contact-bubble"><MailIcon class="contact-icon" /></div>
                        <h3>{"Email"}</h3>
                        <p>{ config::get_contact_email() }</p>
                    </div>
                    <div class="contact-card">
                        <div class="contact-bubble"><PhoneIcon class="contact-icon" /></div>
                        <h3>{"Telp Kami"}</h3>
                        <p>{ config::get_contact_phone() }</p>
                    </div>
                    <div class="contact-card">
                        <div class="contact-bubble"><MapPinIcon class="contact-icon" /></div>
                        <h3>{"Kunjungi Kami"}</h3>
                        <p>{ config::get_contact_address() }</p>
                    </div>
                </div>
                <div class="social-block">
                    <p>{"Follow kami di media sosial"}</p>
                    <div class="social-links">
                        <a href="#" class="social-link"><FacebookIcon class="social-icon" /></a>
                        <a href="#" class="social-link"><InstagramIcon class="social-icon" /></a>
                        <a href="#" class="social-link"><TwitterIcon class="social-icon" /></a>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-brand">
                    <WavesIcon class="footer-icon" />
                    <span>{"Jaga Pantai"}</span>
                </div>
                <p class="footer-tagline">
                    {"Bersama, kita bisa buat perbedaan nyata untuk pantai dan laut kita."}
                </p>
                <p class="footer-copyright">{"© 2025 Jaga Pantai. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
                    .campaign-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #ecfeff, #eff6ff);
                        color: #111827;
                        font-family: system-ui, -apple-system, sans-serif;
                        margin: 0 auto;
                        width: 100%;
                        overflow-x: hidden;
                        box-sizing: border-box;
                    }

                    .campaign-page section {
                        padding: 4rem 1rem;
                        scroll-margin-top: 4rem;
                    }

                    .campaign-page h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        text-align: center;
                        color: #111827;
                        margin-bottom: 1rem;
                    }

                    .section-intro {
                        text-align: center;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto 3rem auto;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                        z-index: 50;
                        transition: box-shadow 0.3s ease;
                    }

                    .top-nav.scrolled {
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 4rem;
                        padding: 0 1rem;
                    }

                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .brand-icon {
                        height: 2rem;
                        width: 2rem;
                        color: #0891b2;
                    }

                    .brand-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #1f2937;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #4b5563;
                        transition: color 0.2s ease;
                        padding: 0;
                        font-family: inherit;
                    }

                    .nav-link:hover,
                    .nav-link.active {
                        color: #0891b2;
                    }

                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                        color: #1f2937;
                    }

                    .burger-icon {
                        height: 1.5rem;
                        width: 1.5rem;
                        transition: transform 0.2s ease;
                    }

                    .burger-menu.open .burger-icon {
                        transform: rotate(180deg);
                    }

                    .mobile-menu {
                        display: none;
                        flex-direction: column;
                        padding: 1rem;
                        gap: 0.25rem;
                        background: rgba(255, 255, 255, 0.98);
                    }

                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem 1rem;
                        color: #4b5563;
                        font-size: 1rem;
                        font-family: inherit;
                        border-radius: 0.5rem;
                    }

                    .mobile-link:hover,
                    .mobile-link.active {
                        background: #ecfeff;
                        color: #0891b2;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu {
                            display: block;
                        }

                        .mobile-menu {
                            display: flex;
                        }
                    }

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 6rem;
                        background:
                            linear-gradient(to bottom, rgba(0, 0, 0, 0.5), rgba(22, 78, 99, 0.6)),
                            linear-gradient(160deg, #0e7490, #1e40af);
                    }

                    .hero-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        width: 100%;
                        text-align: center;
                        position: relative;
                        z-index: 1;
                    }

                    .hero h1 {
                        font-size: 4rem;
                        font-weight: 700;
                        line-height: 1.1;
                        color: #fff;
                        text-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                        margin-bottom: 2rem;
                    }

                    .hero-accent {
                        display: block;
                        background: linear-gradient(to right, #67e8f9, #93c5fd);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .hero-subtitle {
                        font-size: 1.4rem;
                        color: #fff;
                        max-width: 48rem;
                        margin: 0 auto 2rem auto;
                        text-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }

                    .cta-primary,
                    .cta-secondary {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        font-size: 1rem;
                        border: none;
                        cursor: pointer;
                        transition: background 0.2s ease, box-shadow 0.2s ease;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
                        font-family: inherit;
                    }

                    .cta-primary {
                        background: #0891b2;
                        color: #fff;
                    }

                    .cta-primary:hover {
                        background: #0e7490;
                    }

                    .cta-secondary {
                        background: #fff;
                        color: #0891b2;
                    }

                    .cta-secondary:hover {
                        background: #f9fafb;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        margin-top: 4rem;
                    }

                    @media (max-width: 768px) {
                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .hero h1 {
                            font-size: 2.6rem;
                        }

                        .hero-subtitle {
                            font-size: 1.1rem;
                        }
                    }

                    .stat-card {
                        background: #fff;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        text-align: center;
                    }

                    .stat-icon {
                        height: 2rem;
                        width: 2rem;
                        color: #0891b2;
                        margin: 0 auto 0.75rem auto;
                        display: block;
                    }

                    .stat-value {
                        font-size: 1.9rem;
                        font-weight: 700;
                        color: #111827;
                    }

                    .stat-label {
                        color: #4b5563;
                        margin-top: 0.25rem;
                    }

                    .about {
                        background: #fff;
                    }

                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    @media (max-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .about-text p {
                        font-size: 1.1rem;
                        color: #374151;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }

                    .about-highlight {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }

                    .highlight-icon {
                        height: 1.5rem;
                        width: 1.5rem;
                        color: #0891b2;
                        flex-shrink: 0;
                        margin-top: 0.25rem;
                    }

                    .about-highlight h3 {
                        font-weight: 600;
                        color: #111827;
                        margin: 0;
                    }

                    .about-highlight p {
                        color: #4b5563;
                        margin: 0;
                        font-size: 1rem;
                    }

                    .about-panel {
                        background: linear-gradient(135deg, #22d3ee, #3b82f6);
                        border-radius: 1rem;
                        height: 24rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        text-align: center;
                    }

                    .panel-icon {
                        height: 6rem;
                        width: 6rem;
                        opacity: 0.8;
                        margin-bottom: 1rem;
                    }

                    .panel-line {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin: 0;
                    }

                    .panel-line-big {
                        font-size: 1.9rem;
                        font-weight: 700;
                        margin: 0;
                    }

                    .events-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 768px) {
                        .events-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .event-card {
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                        transition: box-shadow 0.3s ease;
                    }

                    .event-card:hover {
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    .event-stripe {
                        height: 0.5rem;
                        background: linear-gradient(to right, #06b6d4, #3b82f6);
                    }

                    .event-body {
                        padding: 1.5rem;
                    }

                    .event-body h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }

                    .event-row {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #4b5563;
                        margin-bottom: 0.5rem;
                    }

                    .event-icon {
                        height: 1.25rem;
                        width: 1.25rem;
                        color: #0891b2;
                        flex-shrink: 0;
                    }

                    .event-signup {
                        width: 100%;
                        padding: 0.75rem;
                        margin-top: 1rem;
                        background: #0891b2;
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                        font-family: inherit;
                    }

                    .event-signup:hover {
                        background: #0e7490;
                    }

                    .volunteer {
                        background: #fff;
                    }

                    .volunteer-form {
                        max-width: 56rem;
                        margin: 0 auto;
                        background: linear-gradient(135deg, #ecfeff, #eff6ff);
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }

                    .form-field {
                        margin-bottom: 1.5rem;
                    }

                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }

                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #d1d5db;
                        outline: none;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                        font-size: 1rem;
                        font-family: inherit;
                        box-sizing: border-box;
                        resize: none;
                    }

                    .form-field input:focus,
                    .form-field textarea:focus {
                        border-color: #06b6d4;
                        box-shadow: 0 0 0 2px #a5f3fc;
                    }

                    .form-submit {
                        width: 100%;
                        padding: 1rem;
                        background: linear-gradient(to right, #0891b2, #2563eb);
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        font-size: 1rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
                        transition: filter 0.2s ease;
                        font-family: inherit;
                    }

                    .form-submit:hover {
                        filter: brightness(0.92);
                    }

                    .survey-card {
                        max-width: 56rem;
                        margin: 0 auto;
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                    }

                    .survey-header {
                        background: linear-gradient(to right, #0891b2, #2563eb);
                        padding: 1.5rem;
                        color: #fff;
                    }

                    .survey-header h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem 0;
                    }

                    .survey-header p {
                        opacity: 0.9;
                        margin: 0;
                    }

                    .survey-embed {
                        padding: 2rem;
                    }

                    .survey-embed iframe {
                        border-radius: 0.5rem;
                        border: none;
                    }

                    .survey-fallback {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-top: 1rem;
                        text-align: center;
                    }

                    .survey-fallback a {
                        color: #0891b2;
                        text-decoration: none;
                    }

                    .survey-fallback a:hover {
                        text-decoration: underline;
                    }

                    .contact {
                        background: #fff;
                    }

                    .contact-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .contact-card {
                        text-align: center;
                        padding: 1.5rem;
                    }

                    .contact-bubble {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        background: #cffafe;
                        border-radius: 9999px;
                        margin-bottom: 1rem;
                    }

                    .contact-icon {
                        height: 2rem;
                        width: 2rem;
                        color: #0891b2;
                    }

                    .contact-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin-bottom: 0.5rem;
                    }

                    .contact-card p {
                        color: #4b5563;
                        margin: 0;
                    }

                    .social-block {
                        margin-top: 3rem;
                        text-align: center;
                    }

                    .social-block > p {
                        color: #4b5563;
                        margin-bottom: 1rem;
                    }

                    .social-links {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .social-link {
                        width: 3rem;
                        height: 3rem;
                        background: #0891b2;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        transition: background 0.2s ease;
                    }

                    .social-link:hover {
                        background: #0e7490;
                    }

                    .social-icon {
                        height: 1.5rem;
                        width: 1.5rem;
                    }

                    .footer {
                        background: #111827;
                        color: #fff;
                        padding: 2rem 1rem;
                        text-align: center;
                    }

                    .footer-brand {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    .footer-icon {
                        height: 1.5rem;
                        width: 1.5rem;
                        color: #22d3ee;
                    }

                    .footer-tagline {
                        color: #9ca3af;
                        margin-bottom: 1rem;
                    }

                    .footer-copyright {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                "#}
            </style>
        </div>
    }
}
