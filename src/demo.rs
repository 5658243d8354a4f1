// Demo mode: a built-in portfolio page and a scripted user session
//
// Used by the binary when no fixture/script is given, and by the test suite
// as the canonical page layout. The session below walks every behavior:
// typing kickoff, scrolling through the sections (navbar styling, link
// highlighting, reveals, counters), the mobile menu, CTA buttons, hovers,
// and both contact-form outcomes.

use crate::dom::{Document, NodeSpec};
use crate::events::PageEvent;

/// The built-in sample portfolio page
///
/// Vertical layout: home 0..700, about 700..1400 (stats at 1150),
/// skills 1400..2000, projects 2000..2700, contact 2700..3500.
pub fn sample_page() -> Document {
    let nav = NodeSpec::new("nav")
        .id("navbar")
        .at(0.0, 80.0)
        .child(
            NodeSpec::new("ul")
                .class("nav-links")
                .child(NodeSpec::new("a").attr("href", "#home").text("Home"))
                .child(NodeSpec::new("a").attr("href", "#about").text("About"))
                .child(NodeSpec::new("a").attr("href", "#skills").text("Skills"))
                .child(NodeSpec::new("a").attr("href", "#projects").text("Projects"))
                .child(NodeSpec::new("a").attr("href", "#contact").text("Contact")),
        )
        .child(NodeSpec::new("div").class("hamburger"));

    let home = NodeSpec::new("section")
        .id("home")
        .class("hero")
        .at(0.0, 700.0)
        .child(NodeSpec::new("h1").text("Jordan Vale"))
        .child(
            NodeSpec::new("p")
                .class("subtitle")
                .text("Full Stack Developer"),
        )
        .child(
            NodeSpec::new("div")
                .class("cta-buttons")
                .child(
                    NodeSpec::new("a")
                        .class("btn")
                        .class("btn-primary")
                        .text("View Projects"),
                )
                .child(
                    NodeSpec::new("a")
                        .class("btn")
                        .class("btn-secondary")
                        .text("Download CV"),
                ),
        );

    let stat = |value: &str, label: &str| {
        NodeSpec::new("div")
            .class("stat-item")
            .child(NodeSpec::new("h3").text(value))
            .child(NodeSpec::new("p").text(label))
    };
    let about = NodeSpec::new("section")
        .id("about")
        .at(700.0, 700.0)
        .child(
            NodeSpec::new("div")
                .class("about-content")
                .at(750.0, 350.0)
                .text("A developer who enjoys small sharp tools."),
        )
        .child(
            NodeSpec::new("div")
                .class("stats")
                .at(1150.0, 250.0)
                .child(stat("150+", "Commits a month"))
                .child(stat("40+", "Projects shipped"))
                .child(stat("N/A", "Coffee spilled")),
        );

    let skill = |name: &str| NodeSpec::new("div").class("skill-item").text(name);
    let skills = NodeSpec::new("section")
        .id("skills")
        .at(1400.0, 600.0)
        .child(
            NodeSpec::new("div")
                .class("skill-category")
                .at(1450.0, 250.0)
                .child(skill("Rust"))
                .child(skill("TypeScript")),
        )
        .child(
            NodeSpec::new("div")
                .class("skill-category")
                .at(1720.0, 250.0)
                .child(skill("PostgreSQL"))
                .child(skill("Kubernetes")),
        );

    let card = |title: &str| {
        NodeSpec::new("div")
            .class("project-card")
            .child(NodeSpec::new("h3").text(title))
    };
    let projects = NodeSpec::new("section")
        .id("projects")
        .at(2000.0, 700.0)
        .child(card("Telemetry proxy").at(2050.0, 300.0))
        .child(card("Terminal dashboard").at(2370.0, 300.0));

    let field = |tag: &str, name: &str, kind: Option<&str>| {
        let spec = NodeSpec::new(tag).attr("name", name);
        match kind {
            Some(k) => spec.attr("type", k),
            None => spec,
        }
    };
    let contact = NodeSpec::new("section")
        .id("contact")
        .at(2700.0, 800.0)
        .child(
            NodeSpec::new("div")
                .class("contact-content")
                .at(2750.0, 300.0)
                .text("Get in touch"),
        )
        .child(
            NodeSpec::new("form")
                .class("contact-form")
                .at(3050.0, 400.0)
                .child(field("input", "name", Some("text")))
                .child(field("input", "email", Some("email")))
                .child(field("input", "subject", Some("text")))
                .child(field("textarea", "message", None)),
        );

    Document::from_spec(
        NodeSpec::new("body")
            .child(nav)
            .child(home)
            .child(about)
            .child(skills)
            .child(projects)
            .child(contact),
    )
}

/// The scripted demo session: (description, event) pairs in play order
pub fn demo_timeline() -> Vec<(&'static str, PageEvent)> {
    fn click(target: &str) -> PageEvent {
        PageEvent::Click {
            target: target.to_string(),
        }
    }

    vec![
        ("wait for the typing effect to start", PageEvent::Advance { ms: 1600 }),
        ("let the subtitle finish typing", PageEvent::Advance { ms: 2500 }),
        ("scroll a little: navbar picks up its treatment", PageEvent::Scroll { y: 150.0 }),
        ("open the mobile menu", click(".hamburger")),
        ("click the Home link: smooth scroll, menu closes", click(".nav-links a")),
        ("scroll to the stats: counters arm", PageEvent::Scroll { y: 1100.0 }),
        ("let the counters finish", PageEvent::Advance { ms: 2100 }),
        ("scroll through skills and projects", PageEvent::Scroll { y: 1700.0 }),
        ("hover a project card", PageEvent::PointerEnter {
            target: ".project-card".to_string(),
        }),
        ("and leave it", PageEvent::PointerLeave {
            target: ".project-card".to_string(),
        }),
        ("try the CV button: informational notification", click(".cta-buttons .btn-secondary")),
        ("let the notification expire", PageEvent::Advance { ms: 4000 }),
        ("submit the empty contact form: error notification", PageEvent::Submit {
            target: ".contact-form".to_string(),
        }),
        ("dismissal", PageEvent::Advance { ms: 4000 }),
    ]
}
