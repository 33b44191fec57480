//! Static site content and the pure filters over it.

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Development,
    Design,
    Mobile,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Mobile => "Mobile",
        }
    }
}

/// Work listing filter. `All` is the default "show everything" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const OPTIONS: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Development),
        Filter::Only(Category::Design),
        Filter::Only(Category::Mobile),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == category,
        }
    }
}

/// Where a card or CTA points.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkTarget {
    Internal(Route),
    External(&'static str),
    None,
}

/// An ordered, never-empty list of images. Single-image projects simply have
/// no extras.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSet {
    cover: &'static str,
    extras: &'static [&'static str],
}

impl ImageSet {
    pub const fn single(cover: &'static str) -> Self {
        Self { cover, extras: &[] }
    }

    pub const fn slides(cover: &'static str, extras: &'static [&'static str]) -> Self {
        Self { cover, extras }
    }

    pub fn len(&self) -> usize {
        1 + self.extras.len()
    }

    pub fn is_slideshow(&self) -> bool {
        !self.extras.is_empty()
    }

    /// Image at `index`, wrapping around the end.
    pub fn get(&self, index: usize) -> &'static str {
        match index % self.len() {
            0 => self.cover,
            i => self.extras[i - 1],
        }
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub images: ImageSet,
    pub link: LinkTarget,
    pub year: &'static str,
    pub description: &'static str,
    /// Posters are shown in a 3:4 frame instead of 16:10.
    pub portrait: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "SrestaMart",
        category: Category::Development,
        tags: &["E-Commerce", "React", "Node.js", "RazorPay"],
        images: ImageSet::single("/assets/sresta.jpg"),
        link: LinkTarget::External("https://www.srestamart.com"),
        year: "2025",
        description: "A high-performance headless commerce platform serving daily users with sub-second load times.",
        portrait: false,
    },
    Project {
        id: 2,
        title: "Brahmin Foods",
        category: Category::Development,
        tags: &["E-Commerce", "HTML CSS", "Node.js", "RazorPay"],
        images: ImageSet::single("/assets/brahmin.png"),
        link: LinkTarget::External("https://brahminfoods.in"),
        year: "2025",
        description: "A modern web presence and online ordering system for a traditional food distributor.",
        portrait: false,
    },
    Project {
        id: 3,
        title: "Cakeroven Loyalty",
        category: Category::Mobile,
        tags: &["React js", "CRM", "Rewards", "RazorPay"],
        images: ImageSet::single("/assets/cakeroven.png"),
        link: LinkTarget::External("https://cakeroven-crm.onrender.com"),
        year: "2025",
        description: "A cross-platform customer retention web application featuring gamified rewards.",
        portrait: false,
    },
    Project {
        id: 4,
        title: "PixelKode Identity",
        category: Category::Design,
        tags: &["Branding", "Motion", "3D"],
        images: ImageSet::single("/assets/logo.png"),
        link: LinkTarget::External("https://pixelkode.netlify.app"),
        year: "2024",
        description: "The comprehensive rebranding of a creative agency, focusing on futuristic typography.",
        portrait: false,
    },
    Project {
        id: 5,
        title: "Weekend Adventures",
        category: Category::Design,
        tags: &["Social Media", "Print", "Photoshop"],
        images: ImageSet::slides("/assets/1.png", &["/assets/2.png", "/assets/3.png"]),
        link: LinkTarget::None,
        year: "2025",
        description: "A series of high-impact posters designed for a travel agency's summer campaign.",
        portrait: true,
    },
    Project {
        id: 6,
        title: "Sharma Foods",
        category: Category::Development,
        tags: &["Full Stack", "PostgreSQL", "Node.js", "RazorPay"],
        images: ImageSet::single("/assets/sharma.png"),
        link: LinkTarget::External("https://sharmafoods.in"),
        year: "2025",
        description: "A brand identity and web platform for a traditional food distributor expanding into retail markets.",
        portrait: false,
    },
    Project {
        id: 7,
        title: "Village Chicken Campaign",
        category: Category::Design,
        tags: &["Social Media", "Print", "Photoshop"],
        images: ImageSet::slides("/assets/img4.png", &["/assets/img5.png"]),
        link: LinkTarget::None,
        year: "2025",
        description: "Promotional pamphlet and social media kit designed for a local organic food brand.",
        portrait: true,
    },
];

/// Projects matching `filter`, in listing order.
pub fn filter_projects(filter: Filter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p.category)).collect()
}

/// Home page "selected works" teaser.
pub struct Showcase {
    pub title: &'static str,
    pub label: &'static str,
    pub image: &'static str,
    pub link: LinkTarget,
}

pub const SHOWCASE: &[Showcase] = &[
    Showcase {
        title: "Sresta Mart",
        label: "E-Commerce Platform",
        image: "/assets/sresta.jpg",
        link: LinkTarget::External("https://www.srestamart.com"),
    },
    Showcase {
        title: "PixelKode Studio",
        label: "Agency Portfolio",
        image: "/assets/logo.png",
        link: LinkTarget::Internal(Route::About),
    },
    Showcase {
        title: "Sharma Foods",
        label: "Brand Identity & Web",
        image: "/assets/sharma.png",
        link: LinkTarget::External("https://sharmafoods.in"),
    },
    Showcase {
        title: "Cakeroven",
        label: "Loyalty System",
        image: "/assets/cakeroven.png",
        link: LinkTarget::External("https://cakeroven-crm.onrender.com"),
    },
];

pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "web",
        icon: "🌐",
        title: "Web Engineering",
        description: "Architecting high-performance web applications using modern React ecosystems. We prioritize accessibility, SEO, and sub-second load times.",
        capabilities: &["Next.js & React", "Headless CMS", "Progressive Web Apps", "WebGL / 3D Experiences"],
    },
    Service {
        id: "app",
        icon: "📱",
        title: "Mobile Solutions",
        description: "Native-grade cross-platform applications. We bridge the gap between web and mobile to deliver fluid, intuitive experiences on iOS and Android.",
        capabilities: &["React Native", "Expo Ecosystem", "Native Modules", "App Store Optimization"],
    },
    Service {
        id: "design",
        icon: "🎨",
        title: "Product Design",
        description: "User-centric interface design that marries aesthetic beauty with functional clarity. We build comprehensive design systems, not just pages.",
        capabilities: &["UI/UX Architecture", "Design Systems", "Prototyping", "Motion Design"],
    },
    Service {
        id: "backend",
        icon: "🗄️",
        title: "System Architecture",
        description: "Robust, scalable backend infrastructure designed to handle growth. We ensure your data is secure, consistent, and instantly available.",
        capabilities: &["Node.js & Express", "PostgreSQL / SQL", "Microservices", "API Development"],
    },
    Service {
        id: "graphics",
        icon: "✒️",
        title: "Graphic Design",
        description: "Compelling visual narratives designed to stop the scroll. We blend high-end Adobe artistry with efficient Canva workflows for speed and scale.",
        capabilities: &["Adobe Creative Suite", "Canva Pro Workflows", "Brand Collateral", "Social Media Kits"],
    },
    Service {
        id: "marketing",
        icon: "📈",
        title: "Digital Marketing",
        description: "Amplify your brand voice and dominate search rankings. We fuse creative storytelling with data-driven performance marketing to drive real ROI.",
        capabilities: &["SEO & Search Dominance", "Content Strategy", "Social Media Management", "Performance Analytics"],
    },
];

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[Step] = &[
    Step { number: "01", title: "Discovery", description: "Deep dive into business goals and user needs." },
    Step { number: "02", title: "Architecture", description: "System design and technology selection." },
    Step { number: "03", title: "Development", description: "Agile sprints with bi-weekly deliverables." },
    Step { number: "04", title: "Launch", description: "QA, deployment, and post-launch monitoring." },
];

pub const METHOD: &[Step] = &[
    Step { number: "01", title: "Discovery & Strategy", description: "We strip your problem down to its core. No assumptions, just data-driven insights and architectural planning." },
    Step { number: "02", title: "Design & Prototype", description: "Visualizing the solution with high-fidelity mockups, motion studies, and interactive prototypes." },
    Step { number: "03", title: "Development", description: "Clean, scalable code. React, Node.js, and cloud-native systems that handle scale without breaking a sweat." },
    Step { number: "04", title: "Launch & Scale", description: "Deploying to the edge. 99.9% uptime. Continuous optimization based on real user analytics." },
];

pub const TECH_STACK: &[&str] = &[
    "React", "TypeScript", "Node.js", "PostgreSQL", "Tailwind", "Figma", "AWS", "HTML CSS",
    "MYSQL", "Vercel", "Canva", "Adobe Photoshop", "CRM", "SEO", "GitHub", "VS Code",
    "Railway", "Render",
];

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value { title: "Obsessive Precision", description: "We sweat the small stuff. The 1px alignment, the 10ms latency, the semantic structure. Excellence is in the details." },
    Value { title: "Radical Performance", description: "Speed is a feature. We engineer systems that load instantly and respond immediately, respecting your user's time." },
    Value { title: "True Partnership", description: "We are not a transactional vendor. We function as your internal product team, invested in your long-term growth." },
    Value { title: "Clean Architecture", description: "We write code that humans can read and machines can scale. Future-proof foundations for evolving businesses." },
    Value { title: "Aesthetic Intelligence", description: "Design is not just decoration. It is how something works. We merge form and function into a seamless experience." },
    Value { title: "Proactive Strategy", description: "We don't just take orders. We challenge assumptions and provide strategic guidance to maximize ROI." },
];

pub const NAV_LINKS: &[(&str, Route)] = &[
    ("Studio", Route::Home),
    ("Work", Route::Work),
    ("Services", Route::Services),
    ("Contact", Route::Contact),
    ("About", Route::About),
];

pub const SITEMAP: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("Work", Route::Work),
    ("Services", Route::Services),
    ("About Studio", Route::About),
    ("Contact", Route::Contact),
];

pub const LEGAL: &[(&str, Route)] = &[
    ("Privacy Policy", Route::Privacy),
    ("Terms of Service", Route::Terms),
];

pub const EMAIL: &str = "pixelkode.kp@gmail.com";
pub const EMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1&to=pixelkode.kp@gmail.com";
pub const PHONE_DISPLAY: &str = "+91 889 792 5715";
pub const PHONE_URL: &str = "tel:+918897925715";
pub const WHATSAPP_URL: &str = "https://wa.me/918897925715";
pub const LOCATION: &str = "Andhra Pradesh, India";

pub const SOCIALS: &[(&str, &str)] = &[
    ("LinkedIn", "https://linkedin.com"),
    ("Instagram", "https://www.instagram.com/pixelkode.co/"),
    ("Facebook", "https://www.facebook.com/people/pixelkodeco/61581103567444/"),
    ("YouTube", "https://www.youtube.com/channel/UCnxP_mhXmhVA-fwxfb4jWMw"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_returns_every_project_in_order() {
        let all = filter_projects(Filter::All);
        assert_eq!(all.len(), PROJECTS.len());
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn design_returns_only_design_in_order() {
        let design = filter_projects(Filter::Only(Category::Design));
        assert_eq!(ids(&design), vec![4, 5, 7]);
        assert!(design.iter().all(|p| p.category == Category::Design));
    }

    #[test]
    fn filters_partition_the_listing() {
        let total: usize = Filter::OPTIONS[1..]
            .iter()
            .map(|&f| filter_projects(f).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
        assert_eq!(ids(&filter_projects(Filter::Only(Category::Mobile))), vec![3]);
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(Filter::default(), Filter::All);
        assert_eq!(Filter::default().label(), "All");
    }

    #[test]
    fn single_image_set_wraps_to_itself() {
        let set = ImageSet::single("/a.png");
        assert_eq!(set.len(), 1);
        assert!(!set.is_slideshow());
        assert_eq!(set.next_index(0), 0);
        assert_eq!(set.get(5), "/a.png");
    }

    #[test]
    fn slideshow_cycles_and_wraps() {
        let set = ImageSet::slides("/1.png", &["/2.png", "/3.png"]);
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(set.get(index));
            index = set.next_index(index);
        }
        assert_eq!(seen, vec!["/1.png", "/2.png", "/3.png", "/1.png"]);
    }

    #[test]
    fn posters_have_no_link_and_several_images() {
        for project in PROJECTS.iter().filter(|p| p.portrait) {
            assert_eq!(project.link, LinkTarget::None);
            assert!(project.images.is_slideshow());
        }
    }
}
