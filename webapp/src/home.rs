use dioxus::prelude::*;

use crate::common::SiteHandle;

// homepage markup
//
// everything interactive on this page is wired up by the behavior crate once the markup
// is mounted, so these components only render static content.  the exceptions are the
// hamburger icon and the about-us flyout, which call into the site handle directly
#[component]
pub fn HomePage() -> Element {
    rsx! {
        SiteHeader {}
        main {
            Hero {}
            WelcomeSections {}
            Facilities {}
            WhyChoose {}
        }
        SiteFooter {}
    }
}

#[component]
fn SiteHeader() -> Element {
    let handle = use_context::<SiteHandle>();

    rsx! {
        header { class: "main-header",
            nav { class: "main-nav",
                span { class: "school-brand", "Shree Radha Krishna School" }
                div {
                    class: "hamburger-menu",
                    onclick: move |_| handle.toggle_mobile_menu(),
                    span {}
                    span {}
                    span {}
                }
                ul { class: "nav-menu",
                    li { a { href: "#", "Home" } }
                    li { class: "dropdown",
                        a { href: "#", "About Us" }
                        ul { class: "dropdown-menu",
                            SectionItem { ident: "welcome", label: "Welcome" }
                            SectionItem { ident: "director", label: "Director's Message" }
                            SectionItem { ident: "principal", label: "Principal's Message" }
                        }
                    }
                    li { a { href: "#", "Facilities" } }
                    li { a { href: "#", "Infrastructure" } }
                    li { class: "dropdown",
                        a { href: "#", "Gallery" }
                        ul { class: "dropdown-menu",
                            li { a { href: "#", "Photo Gallery" } }
                            li { a { href: "#", "Video Gallery" } }
                        }
                    }
                    li { a { href: "#", "Admission" } }
                    li { a { href: "#", "Contact Us" } }
                }
            }
        }
    }
}

// flyout entry that jumps to one of the welcome subsections
#[component]
fn SectionItem(ident: &'static str, label: &'static str) -> Element {
    let handle = use_context::<SiteHandle>();

    rsx! {
        li {
            a {
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    handle.show_section(ident);
                },
                "{label}"
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero-section",
            h1 { "Shree Radha Krishna School" }
            p { "Nurturing young minds with values, knowledge and care" }
            div { class: "hero-actions",
                a { id: "apply-btn", class: "apply-btn", href: "#", "Apply Now" }
                button { id: "phone", "Call Us" }
            }
        }
    }
}

#[component]
fn WelcomeSections() -> Element {
    rsx! {
        section { class: "welcome-section",
            div { id: "welcome",
                h2 { "Welcome to Our School" }
                p {
                    "Shree Radha Krishna School offers a caring environment where every child is "
                    "encouraged to learn, explore and grow at their own pace."
                }
            }
        }
        section { class: "welcome-section",
            div { id: "director",
                h2 { "Director's Message" }
                p {
                    "Our aim is to build strong foundations in academics and character so that our "
                    "students leave ready for whatever comes next."
                }
            }
        }
        section { class: "welcome-section",
            div { id: "principal",
                h2 { "Principal's Message" }
                p {
                    "We believe in partnership with parents, and our doors are always open to "
                    "families who want to be part of their child's learning."
                }
            }
        }
    }
}

#[component]
fn Facilities() -> Element {
    let cards = [
        ("Smart Classrooms", "Bright, well ventilated rooms with digital teaching aids."),
        ("Library", "A growing collection of books for readers of every age."),
        ("Playground", "Open space for sports, games and morning assembly."),
        ("Transport", "Safe school buses covering the nearby sectors."),
    ];

    rsx! {
        section { class: "facilities-section",
            h2 { "Our Facilities" }
            div { class: "facility-grid",
                for (title, text) in cards {
                    div { class: "facility-card",
                        h3 { "{title}" }
                        p { "{text}" }
                    }
                }
            }
        }
    }
}

#[component]
fn WhyChoose() -> Element {
    rsx! {
        section { class: "why-choose-section",
            h2 { "Why Choose Us" }
            ul {
                li { "Experienced and dedicated teachers" }
                li { "Small class sizes with individual attention" }
                li { "Focus on values alongside academics" }
                li { "Regular co-curricular and cultural activities" }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer { class: "main-footer",
            h3 { "Contact Us" }
            p { "H.No. 317/12, Hans Enclave, Near Rajiv Chowk, Gurugram, Haryana" }
            p { "Phone: +91-8284959139" }
            p { "WhatsApp: +91-9041679747" }
        }
    }
}
