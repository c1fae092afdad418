//! Hard-coded site content. The page is a brochure; none of this is
//! configurable at runtime.

pub const PRESENCE_SECTION_ID: &str = "presence";

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "#home" },
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Services", anchor: "#services" },
    NavLink { label: "Portfolio", anchor: "#portfolio" },
    NavLink { label: "Testimonials", anchor: "#testimonials" },
    NavLink { label: "Presence", anchor: "#presence" },
    NavLink { label: "Contact", anchor: "#contact" },
];

pub const HERO_SLIDES: &[&str] = &[
    "/images/hero/living-room.webp",
    "/images/hero/workspace.webp",
    "/images/hero/facade.webp",
];

pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Interior Design",
        blurb: "Concept to handover for homes, offices, and retail spaces.",
    },
    Service {
        title: "Turnkey Build",
        blurb: "Civil work, carpentry, and finishing under one contract.",
    },
    Service {
        title: "Space Planning",
        blurb: "Layouts that make the most of every square foot.",
    },
    Service {
        title: "Project Management",
        blurb: "Schedules, vendors, and budgets tracked end to end.",
    },
];

pub struct PortfolioItem {
    pub title: &'static str,
    pub image: &'static str,
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem { title: "Lakeview Residence, Pune", image: "/images/portfolio/lakeview.webp" },
    PortfolioItem { title: "Harbor House Cafe, Goa", image: "/images/portfolio/harbor.webp" },
    PortfolioItem { title: "Northline Offices, Delhi", image: "/images/portfolio/northline.webp" },
    PortfolioItem { title: "Courtyard Villa, Karnal", image: "/images/portfolio/courtyard.webp" },
    PortfolioItem { title: "Atrium Showroom, Mumbai", image: "/images/portfolio/atrium.webp" },
    PortfolioItem { title: "Hillside Retreat, Coimbatore", image: "/images/portfolio/hillside.webp" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They turned a bare shell into a home we never want to leave. Every deadline held.",
        author: "Ritika Sharma",
        role: "Homeowner, Delhi",
    },
    Testimonial {
        quote: "Our cafe fit-out finished two weeks early and under budget. Unheard of.",
        author: "Leon D'Souza",
        role: "Cafe Owner, Goa",
    },
    Testimonial {
        quote: "The space planning alone paid for the engagement. Our team finally fits.",
        author: "Anand Krishnan",
        role: "COO, Chennai",
    },
    Testimonial {
        quote: "One contract, one point of contact, zero surprises. Exactly as promised.",
        author: "Meera Patel",
        role: "Developer, Ahmedabad",
    },
    Testimonial {
        quote: "They managed vendors across three cities without us lifting a finger.",
        author: "Sanjay Rao",
        role: "Retail Director, Bangalore",
    },
    Testimonial {
        quote: "Thoughtful details everywhere you look. Guests ask for their number weekly.",
        author: "Farah Ali",
        role: "Hotelier, Mumbai",
    },
];

pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Projects Delivered", target: 140, suffix: "+" },
    Stat { label: "Cities", target: 11, suffix: "" },
    Stat { label: "Years in Business", target: 12, suffix: "+" },
    Stat { label: "Repeat Clients", target: 95, suffix: "%" },
];
