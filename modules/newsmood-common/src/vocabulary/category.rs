use super::TagDefinition;

/// Topical categories a headline can be tagged with. Order is the listing order.
pub const CATEGORY_TAGS: &[TagDefinition] = &[
    TagDefinition {
        name: "Cost of Living",
        guidelines: &[
            "Tag articles about rising prices, inflation, household expenses, and daily economic pressures facing average citizens.",
        ],
    },
    TagDefinition {
        name: "Housing Crisis",
        guidelines: &[
            "Use for stories about housing affordability, rent increases, mortgage issues, property shortages, or housing market challenges.",
        ],
    },
    TagDefinition {
        name: "Taxation Policy",
        guidelines: &[
            "For coverage of tax reforms, rates, disputes, or significant changes to personal/corporate taxation systems.",
        ],
    },
    TagDefinition {
        name: "Public Spending & Budgets",
        guidelines: &[
            "Tag articles about government spending, national budgets, deficit discussions, or public fund allocation.",
        ],
    },
    TagDefinition {
        name: "Elections & Campaigns",
        guidelines: &[
            "Use for election news, political campaigns, voting, polling data, and electoral process stories.",
        ],
    },
    TagDefinition {
        name: "Diplomacy & International Relations",
        guidelines: &[
            "For diplomatic meetings, international agreements, foreign policy, or relations between nations.",
        ],
    },
    TagDefinition {
        name: "Social Justice & Equality",
        guidelines: &[
            "Tag stories about civil rights, discrimination, protests, or discussions of race, gender, and LGBTQ+ issues.",
        ],
    },
    TagDefinition {
        name: "Immigration & Refugees",
        guidelines: &[
            "For articles about migration policies, border issues, asylum seekers, or immigration reform debates.",
        ],
    },
    TagDefinition {
        name: "Education Policy",
        guidelines: &[
            "Use for school reforms, educational funding, curriculum changes, or academic institution policies.",
        ],
    },
    TagDefinition {
        name: "Business & Corporate News",
        guidelines: &[
            "Tag stories about major companies, corporate strategies, business performance, or industry trends.",
        ],
    },
    TagDefinition {
        name: "Banking & Financial Services",
        guidelines: &[
            "For banking regulations, interest rates, lending practices, or financial institution developments.",
        ],
    },
    TagDefinition {
        name: "Startups & Entrepreneurship",
        guidelines: &[
            "Use for new ventures, funding rounds, startup ecosystem news, or entrepreneur profiles.",
        ],
    },
    TagDefinition {
        name: "Financial Markets & Investments",
        guidelines: &[
            "Tag market trends, stock performance, investment analysis, or trading patterns.",
        ],
    },
    TagDefinition {
        name: "Digital Economy & Cryptocurrencies",
        guidelines: &[
            "For cryptocurrency news, digital payments, online marketplaces, or virtual economic trends.",
        ],
    },
    TagDefinition {
        name: "Trade & Exports",
        guidelines: &[
            "Use for international trade, tariffs, trade agreements, or export/import developments.",
        ],
    },
    TagDefinition {
        name: "Tourism & Travel",
        guidelines: &[
            "Tag stories about tourism industry, travel trends, hospitality sector, or destination development.",
        ],
    },
    TagDefinition {
        name: "Artificial Intelligence & Automation",
        guidelines: &[
            "For AI developments, machine learning breakthroughs, or automation impact stories.",
        ],
    },
    TagDefinition {
        name: "Cybersecurity & Data Privacy",
        guidelines: &[
            "Use for data breaches, cyber attacks, privacy regulations, or digital security issues.",
        ],
    },
    TagDefinition {
        name: "Digital Privacy & Ethics",
        guidelines: &[
            "Tag ethical concerns about technology, digital rights, algorithmic bias, or tech regulation debates.",
        ],
    },
    TagDefinition {
        name: "Technology & Gadgets",
        guidelines: &[
            "For consumer technology, device launches, tech reviews, or hardware innovations.",
        ],
    },
    TagDefinition {
        name: "Space Exploration",
        guidelines: &[
            "Use for space missions, astronomical discoveries, aerospace industry, or space technology.",
        ],
    },
    TagDefinition {
        name: "Scientific Research & Discovery",
        guidelines: &[
            "Tag breakthrough studies, research findings, or scientific innovations not covered by other categories.",
        ],
    },
    TagDefinition {
        name: "Climate Change",
        guidelines: &[
            "For global warming news, climate policy, environmental impact, or climate science updates.",
        ],
    },
    TagDefinition {
        name: "Sustainability & Green Tech",
        guidelines: &[
            "Use for renewable energy, sustainable practices, green innovations, or environmental technology.",
        ],
    },
    TagDefinition {
        name: "Natural Disasters",
        guidelines: &[
            "Tag natural catastrophes, weather events, geological phenomena, or disaster response efforts.",
        ],
    },
    TagDefinition {
        name: "Pollution & Waste",
        guidelines: &[
            "For environmental contamination, waste management, recycling initiatives, or pollution control.",
        ],
    },
    TagDefinition {
        name: "Conservation & Wildlife",
        guidelines: &[
            "Use for wildlife protection, biodiversity, habitat preservation, or species conservation.",
        ],
    },
    TagDefinition {
        name: "Public Health & Outbreaks",
        guidelines: &[
            "Tag disease outbreaks, health emergencies, public health measures, or epidemic/pandemic news.",
        ],
    },
    TagDefinition {
        name: "Mental Health",
        guidelines: &[
            "For mental wellness coverage, psychological health services, or mental health awareness.",
        ],
    },
    TagDefinition {
        name: "Nutrition & Fitness",
        guidelines: &[
            "Use for diet trends, exercise science, wellness programs, or sports medicine.",
        ],
    },
    TagDefinition {
        name: "Healthcare Policy",
        guidelines: &[
            "Tag healthcare legislation, medical insurance, hospital policies, or healthcare system changes.",
        ],
    },
    TagDefinition {
        name: "Celebrity Gossip",
        guidelines: &[
            "For entertainment industry gossip, celebrity news, or public figure personal stories.",
        ],
    },
    TagDefinition {
        name: "Reality Shows",
        guidelines: &[
            "Use for reality TV news, show updates, contestant stories, or format changes.",
        ],
    },
    TagDefinition {
        name: "Arts & Culture",
        guidelines: &[
            "Tag fine arts, cultural events, museum news, or artistic achievements.",
        ],
    },
    TagDefinition {
        name: "Awards & Festivals",
        guidelines: &[
            "For major awards ceremonies, cultural festivals, or industry recognition events.",
        ],
    },
    TagDefinition {
        name: "Major Leagues & Tournaments",
        guidelines: &[
            "Use for professional sports leagues, major competitions, or tournament coverage.",
        ],
    },
    TagDefinition {
        name: "Athlete Scandals & Contract News",
        guidelines: &[
            "Tag sports controversies, player transfers, contract negotiations, or athlete misconduct.",
        ],
    },
    TagDefinition {
        name: "Labor Action & Disputes",
        guidelines: &[
            "For strikes, labor protests, union activities, or workplace disputes.",
        ],
    },
    TagDefinition {
        name: "Employment & Job Market",
        guidelines: &[
            "Use for job trends, unemployment data, workforce development, or labor market analysis.",
        ],
    },
    TagDefinition {
        name: "Consumer Rights & Product Recalls",
        guidelines: &[
            "Tag consumer protection, product safety issues, recalls, or consumer advocacy.",
        ],
    },
    TagDefinition {
        name: "Inventions & Patents",
        guidelines: &[
            "Use for new inventions, patent disputes, or innovative technological developments.",
        ],
    },
    TagDefinition {
        name: "Transportation",
        guidelines: &[
            "Tag transportation systems, vehicle innovations, transit policies, or mobility trends.",
        ],
    },
    TagDefinition {
        name: "Infrastructure & Development",
        guidelines: &[
            "For infrastructure projects, urban development, construction, or facility improvements.",
        ],
    },
    TagDefinition {
        name: "Agriculture & Farming",
        guidelines: &[
            "Use for agricultural news, farming practices, food production, or rural development.",
        ],
    },
    TagDefinition {
        name: "Food & Dining",
        guidelines: &[
            "Tag restaurant industry, culinary trends, food culture, or dining experiences.",
        ],
    },
    TagDefinition {
        name: "Family & Relationships",
        guidelines: &[
            "For family dynamics, relationship trends, parenting, or domestic life stories.",
        ],
    },
    TagDefinition {
        name: "Personal Finance & Money-Saving",
        guidelines: &[
            "Use for financial advice, savings strategies, personal investment, or money management.",
        ],
    },
    TagDefinition {
        name: "Personal Development & Self-Help",
        guidelines: &[
            "Tag self-improvement, career development, life coaching, or personal growth.",
        ],
    },
    TagDefinition {
        name: "Fashion & Trends",
        guidelines: &[
            "For fashion industry news, style trends, designer coverage, or clothing retail.",
        ],
    },
    TagDefinition {
        name: "Demographics & Population",
        guidelines: &[
            "Use for population trends, demographic shifts, census data, or societal changes.",
        ],
    },
    TagDefinition {
        name: "Urban Development & Housing",
        guidelines: &[
            "Tag urban planning, city development, housing projects, or community planning.",
        ],
    },
    TagDefinition {
        name: "Religion & Spirituality",
        guidelines: &[
            "For religious events, spiritual practices, faith communities, or religious conflicts.",
        ],
    },
    TagDefinition {
        name: "Political Scandals & Corruption",
        guidelines: &[
            "Tag political misconduct, corruption investigations, or government accountability stories.",
        ],
    },
    TagDefinition {
        name: "Legal & Justice System",
        guidelines: &[
            "For legal reforms, justice system news, court procedures, or judicial appointments.",
        ],
    },
    TagDefinition {
        name: "Organized Crime & Gangs",
        guidelines: &[
            "Use for criminal network activities, gang-related news, or organized crime investigations.",
        ],
    },
    TagDefinition {
        name: "Court Cases & Trials",
        guidelines: &[
            "Tag significant legal proceedings, high-profile trials, or important court decisions.",
        ],
    },
    TagDefinition {
        name: "Terrorism & Extremism",
        guidelines: &[
            "For terrorist activities, extremist groups, counter-terrorism, or radicalization stories.",
        ],
    },
    TagDefinition {
        name: "Energy Crisis",
        guidelines: &[
            "Use for energy supply issues, power shortages, fuel prices, or energy security concerns.",
        ],
    },
    TagDefinition {
        name: "Weapons & Military Tech",
        guidelines: &[
            "Tag defense technology, military equipment, arms development, or weapons systems.",
        ],
    },
    TagDefinition {
        name: "Esports",
        guidelines: &[
            "For competitive gaming, esports tournaments, gaming teams, or industry developments.",
        ],
    },
    TagDefinition {
        name: "Product Reviews & Comparisons",
        guidelines: &[
            "Tag articles reviewing consumer products, comparison guides, or 'best of' product lists.",
        ],
    },
    TagDefinition {
        name: "Shopping Guides & Deals",
        guidelines: &[
            "Tag articles about shopping sales, discount alerts, or buying guides for specific products.",
        ],
    },
    TagDefinition {
        name: "Sponsored Content & Promotions",
        guidelines: &[
            "For clearly marked sponsored articles, advertorial content, or promotional features.",
        ],
    },
    TagDefinition {
        name: "Product Launches",
        guidelines: &[
            "Use for new product announcements, launch events, or upcoming release coverage.",
        ],
    },
    TagDefinition {
        name: "Subscription Services",
        guidelines: &[
            "Tag reviews or news about streaming services, subscription boxes, or membership programs.",
        ],
    },
    TagDefinition {
        name: "Home & Garden Products",
        guidelines: &[
            "For reviews of household items, garden equipment, or home improvement products.",
        ],
    },
    TagDefinition {
        name: "Beauty & Cosmetics Reviews",
        guidelines: &[
            "Use for makeup reviews, skincare product evaluations, or beauty tool assessments.",
        ],
    },
    TagDefinition {
        name: "Gaming Hardware & Software",
        guidelines: &[
            "Tag reviews of gaming consoles, PC components, or video game releases.",
        ],
    },
    TagDefinition {
        name: "Lifestyle Products",
        guidelines: &[
            "For reviews of wellness products, fitness gear, or lifestyle accessories.",
        ],
    },
    TagDefinition {
        name: "Affiliate Content",
        guidelines: &[
            "Use for articles containing multiple affiliate links or primarily focused on driving purchases.",
        ],
    },
    TagDefinition {
        name: "Tech Reviews",
        guidelines: &[
            "For detailed reviews of smartphones, laptops, tablets, or other consumer electronics.",
        ],
    },
    TagDefinition {
        name: "Automotive Reviews",
        guidelines: &[
            "Use for car reviews, vehicle comparisons, or automotive product evaluations.",
        ],
    },
];
