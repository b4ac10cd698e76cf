//! Static page content: navigation, hero phrases, features, plans, trust
//! marks. Icons are Material Symbols names rendered by the stylesheet's
//! icon font.

/// One entry in the floating navigation.
///
/// `id` doubles as the DOM id of the section the entry points at; the
/// scroll tracker relies on that match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Section forced active near the top of the page.
pub const HOME_SECTION: &str = "hero";

/// Navigation entries, in document order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "hero", label: "Home", icon: "home" },
    NavItem { id: "features", label: "Features", icon: "widgets" },
    NavItem { id: "pricing", label: "Pricing", icon: "payments" },
    NavItem { id: "advanced", label: "About", icon: "info" },
    NavItem { id: "contact", label: "Contact", icon: "mail" },
];

/// Phrases cycled by the hero typewriter.
pub const HERO_PHRASES: &[&str] = &["Malaysian Businesses", "Asian Businesses"];

/// Bar heights (percent) for the hero dashboard mockup chart.
pub const PAYROLL_TREND: &[u32] = &[40, 70, 55, 90, 65, 80, 50];

/// One card in a feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// First feature grid: the core HR pillars.
pub const CORE_FEATURES: &[Feature] = &[
    Feature {
        icon: "payments",
        title: "Payroll Precision",
        description: "Automated calculations compliant with LHDN, KWSP, and PERKESO tax laws. One-click salary disbursement.",
    },
    Feature {
        icon: "calendar_month",
        title: "Leave Management",
        description: "Apply and approve leave on the go. Custom policies for annual, medical, and emergency leave.",
    },
    Feature {
        icon: "receipt_long",
        title: "Claim Clarity",
        description: "Paperless expense claims. Snap a photo of receipts and submit for instant approval.",
    },
    Feature {
        icon: "fingerprint",
        title: "Smart Attendance",
        description: "GPS-enabled clock-in/out via mobile app. Perfect for office and remote teams.",
    },
];

/// Second feature grid: workforce development tools.
pub const ADVANCED_FEATURES: &[Feature] = &[
    Feature {
        icon: "trending_up",
        title: "Performance Pathways",
        description: "Streamline performance reviews with customizable KPIs and 360-degree feedback loops.",
    },
    Feature {
        icon: "badge",
        title: "Seamless Transitions",
        description: "Digital checklists and automated workflows for smooth employee transitions.",
    },
    Feature {
        icon: "draw",
        title: "Smart Document Handling",
        description: "Generate HR letters with AI and sign documents digitally anywhere, anytime on mobile.",
    },
    Feature {
        icon: "visibility",
        title: "Data-Driven Decisions",
        description: "Full visibility on changes with detailed audit logs. Secure and transparent data management.",
    },
];

/// One pricing plan.
///
/// Prices are RM per staff per month; `0` marks a custom-priced plan.
/// `yearly_price` is the discounted monthly rate under yearly billing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub features: &'static [&'static str],
    pub most_popular: bool,
    pub cta: &'static str,
}

/// The three plans shown in the pricing section.
pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: "starter",
        name: "Starter",
        description: "Perfect for startups",
        monthly_price: 50,
        yearly_price: 40,
        features: &["Up to 10 Employees", "Payroll & e-Leave", "Mobile App Access"],
        most_popular: false,
        cta: "Start Free Trial",
    },
    PricingPlan {
        id: "sme-growth",
        name: "SME Growth",
        description: "For growing teams",
        monthly_price: 150,
        yearly_price: 120,
        features: &[
            "Up to 50 Employees",
            "All Features included",
            "Priority Support",
            "AI Templates & E-Sign",
        ],
        most_popular: true,
        cta: "Get Started",
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        description: "For large organizations",
        monthly_price: 0,
        yearly_price: 0,
        features: &[
            "Unlimited Employees",
            "Dedicated Account Manager",
            "On-premise Deployment",
            "Custom Integration",
        ],
        most_popular: false,
        cta: "Contact Sales",
    },
];

/// One compliance partner in the trust bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustMark {
    pub icon: &'static str,
    pub name: &'static str,
}

/// Bodies the product is compliant with, shown under the hero.
pub const TRUST_MARKS: &[TrustMark] = &[
    TrustMark { icon: "account_balance", name: "LHDN" },
    TrustMark { icon: "savings", name: "KWSP (EPF)" },
    TrustMark { icon: "health_and_safety", name: "PERKESO" },
    TrustMark { icon: "work", name: "HRD Corp" },
];
