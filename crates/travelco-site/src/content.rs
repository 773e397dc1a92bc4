//! Static marketing content for the landing page and detail pages.
//!
//! Everything here is hard-coded display data with no behavior. Images are
//! absolute Unsplash URLs; there is no local asset pipeline.

/// One slide of the hero carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: "Discover Maldives",
        subtitle: "Overwater villas, coral reefs, and crystal lagoons",
        image: "https://images.unsplash.com/photo-1573843981267-be1999ff37cd?q=80&w=2400&auto=format&fit=crop",
    },
    HeroSlide {
        title: "Explore Istanbul",
        subtitle: "Where East meets West: bazaars, mosques, and skyline sunsets",
        image: "https://images.unsplash.com/photo-1541432901042-2d8bd64b4a9b?q=80&w=2400&auto=format&fit=crop",
    },
    HeroSlide {
        title: "Georgia Getaways",
        subtitle: "Mountains, vineyards, and storybook towns",
        image: "https://images.unsplash.com/photo-1565008576549-57569a49371d?q=80&w=2400&auto=format&fit=crop",
    },
];

/// A quick-service tile under the hero.
#[derive(Debug, Clone, Copy)]
pub struct ServiceTile {
    pub title: &'static str,
    pub glyph: &'static str,
    /// Tiles that lead somewhere link into the visa directory.
    pub opens_visa_directory: bool,
}

pub const QUICK_SERVICES: [ServiceTile; 6] = [
    ServiceTile { title: "Holidays", glyph: "🏖", opens_visa_directory: false },
    ServiceTile { title: "Hotel", glyph: "🏨", opens_visa_directory: false },
    ServiceTile { title: "Visa", glyph: "🛂", opens_visa_directory: true },
    ServiceTile { title: "Flights", glyph: "✈", opens_visa_directory: false },
    ServiceTile { title: "Attestation", glyph: "📜", opens_visa_directory: false },
    ServiceTile { title: "Travel Insurance", glyph: "🛡", opens_visa_directory: false },
];

/// A service card in the services section.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub glyph: &'static str,
}

pub const SERVICES: [ServiceCard; 4] = [
    ServiceCard { title: "Flight Tickets", blurb: "Best fares with top airlines", glyph: "✈" },
    ServiceCard { title: "Hotel Bookings", blurb: "Handpicked stays worldwide", glyph: "🏨" },
    ServiceCard { title: "Cruise Packages", blurb: "Luxury voyages & short sails", glyph: "🛳" },
    ServiceCard { title: "Medical Tourism", blurb: "Trusted hospitals & care", glyph: "⚕" },
];

/// A featured destination in the bento grid.
#[derive(Debug, Clone, Copy)]
pub struct Destination {
    pub title: &'static str,
    pub tag: &'static str,
    pub image: &'static str,
    /// Grid placement class for the bento layout.
    pub span_class: &'static str,
}

pub const FEATURED_DESTINATIONS: [Destination; 5] = [
    Destination {
        title: "Maldives",
        tag: "Beach",
        image: "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?q=80&w=1200",
        span_class: "bento-wide bento-tall",
    },
    Destination {
        title: "Istanbul",
        tag: "Culture",
        image: "https://images.unsplash.com/photo-1530053969600-caed2596d242?q=80&w=1200",
        span_class: "bento-narrow",
    },
    Destination {
        title: "Georgia",
        tag: "Mountains",
        image: "https://images.unsplash.com/photo-1512446816042-444d641267d4?q=80&w=1200",
        span_class: "bento-narrow",
    },
    Destination {
        title: "Baku",
        tag: "City",
        image: "https://images.unsplash.com/photo-1588166524941-3bf61a9c41db?q=80&w=1200",
        span_class: "bento-narrow",
    },
    Destination {
        title: "Phuket",
        tag: "Island",
        image: "https://images.unsplash.com/photo-1505761671935-60b3a7427bad?q=80&w=1200",
        span_class: "bento-wide",
    },
];

/// A packaged trip offer with a display price in QAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub title: &'static str,
    pub price: u32,
    pub image: &'static str,
}

pub const HOLIDAY_PACKAGES: [Package; 6] = [
    Package { title: "Maldives 4D/3N", price: 3499, image: "https://images.unsplash.com/photo-1526779259212-939e64788e3c?q=80&w=1200&auto=format&fit=crop" },
    Package { title: "Baku Escape 5D/4N", price: 1999, image: "https://images.unsplash.com/photo-1588166524941-3bf61a9c41db?q=80&w=1200&auto=format&fit=crop" },
    Package { title: "Istanbul Highlights 5D/4N", price: 2599, image: "https://images.unsplash.com/photo-1516483638261-f4dbaf036963?q=80&w=1200&auto=format&fit=crop" },
    Package { title: "Phuket Beach Fun 6D/5N", price: 2999, image: "https://images.unsplash.com/photo-1589330273594-fade1ee91647?q=80&w=1200&auto=format&fit=crop" },
    Package { title: "Swiss Alps Tour 7D/6N", price: 6599, image: "https://images.unsplash.com/photo-1530122037265-a5f1f91d3b99?q=80&w=1200&auto=format&fit=crop" },
    Package { title: "London Explorer 5D/4N", price: 4199, image: "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad?q=80&w=1200&auto=format&fit=crop" },
];

pub const CRUISE_PACKAGES: [Package; 2] = [
    Package { title: "Arabian Gulf Cruise 7N", price: 4299, image: "https://images.unsplash.com/photo-1569931728440-1488c2cfd34b?q=80&w=1200&auto=format&fit=crop" },
    Package { title: "Mediterranean Voyage 5N", price: 3899, image: "https://images.unsplash.com/photo-1543857778-c4a1a3e0b2eb?q=80&w=1200&auto=format&fit=crop" },
];

pub const MEDICAL_PACKAGES: [Package; 2] = [
    Package { title: "Cardiac Checkup – Turkey", price: 1599, image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=1200&auto=format&fit=crop" },
    Package { title: "Dental Implants – Georgia", price: 899, image: "https://images.unsplash.com/photo-1588776814546-1ffcf47267a5?q=80&w=1200&auto=format&fit=crop" },
];

/// A question/answer pair for accordions and FAQ lists.
#[derive(Debug, Clone, Copy)]
pub struct QaItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const WHY_CHOOSE_US: [QaItem; 3] = [
    QaItem {
        question: "Qatar-based travel experts",
        answer: "Local team with global partners delivering consistent quality and support.",
    },
    QaItem {
        question: "Custom itineraries in any budget",
        answer: "From quick weekend getaways to long luxury holidays, crafted around you.",
    },
    QaItem {
        question: "Transparent pricing",
        answer: "No hidden fees. Clear inclusions and exclusions before you book.",
    },
];

pub const VISA_FAQ: [QaItem; 2] = [
    QaItem {
        question: "Is travel insurance mandatory?",
        answer: "For most countries, yes. We recommend having it for safety regardless.",
    },
    QaItem {
        question: "What if my visa gets rejected?",
        answer: "Visa fees are generally non-refundable. However, we ensure your application is error-free to minimize risk.",
    },
];

/// A customer testimonial.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub place: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Aisha M.",
        text: "Seamless experience from visa to hotel. The Maldives package was perfect!",
        place: "Maldives Holiday",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=200&auto=format&fit=crop",
    },
    Testimonial {
        name: "Omar K.",
        text: "Cruise team handled everything. Great value and great memories.",
        place: "Gulf Cruise",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=200&auto=format&fit=crop",
    },
    Testimonial {
        name: "Sara L.",
        text: "Medical trip to Turkey was smooth, hospital coordination was excellent.",
        place: "Medical Tourism",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=200&auto=format&fit=crop",
    },
];

pub const POPULAR_CITIES: [&str; 4] = ["Maldives", "Istanbul", "Baku", "Phuket"];

/// One step of the visa application walkthrough on the detail page.
#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const APPLICATION_STEPS: [ProcessStep; 4] = [
    ProcessStep { title: "Submit Enquiry", description: "Fill out the form with your details." },
    ProcessStep { title: "Document Verification", description: "Our team reviews your documents for accuracy." },
    ProcessStep { title: "Application Submission", description: "We submit your application to the embassy/consulate." },
    ProcessStep { title: "Visa Approval", description: "Receive your visa and get ready to travel!" },
];

// Render-time defaults for records with absent optional fields.
pub const DEFAULT_REQUIREMENTS: [&str; 4] = [
    "Passport (6 months validity)",
    "2 Recent Photographs (White Background)",
    "Bank Statement (Last 3 Months)",
    "NOC from Employer",
];
pub const DEFAULT_PROCESSING_TIME: &str = "5-7 Days";
pub const DEFAULT_PRICE: &str = "Contact Us";
pub const DEFAULT_DETAIL_IMAGE: &str =
    "https://images.unsplash.com/photo-1507608616759-54f48f0af0ee?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";
pub const DIRECTORY_BANNER_IMAGE: &str =
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1600&auto=format&fit=crop";
