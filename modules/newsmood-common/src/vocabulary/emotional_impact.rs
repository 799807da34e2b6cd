use super::TagDefinition;

/// Emotional responses a headline is likely to evoke. Order is the listing order.
pub const EMOTIONAL_IMPACT_TAGS: &[TagDefinition] = &[
    TagDefinition {
        name: "Relief / Reassurance",
        guidelines: &[
            "Content that resolves prior anxieties",
            "Updates providing solutions or improvements to concerning situations",
        ],
    },
    TagDefinition {
        name: "Anxiety / Fear",
        guidelines: &[
            "Content that elicits worry, dread, or fear about potential threats, uncertainties, or future harm",
            "Focuses on immediate or anticipated personal safety concerns",
        ],
    },
    TagDefinition {
        name: "Anger / Outrage",
        guidelines: &[
            "Stories that provoke strong frustration, hostility, or a sense of injustice in readers",
            "Includes reactions to unfairness, corruption, or abuse of power",
        ],
    },
    TagDefinition {
        name: "Moral Outrage / Ethical Conflict",
        guidelines: &[
            "Content that challenges fundamental moral values or presents ethical dilemmas",
            "Stories involving complex moral choices or violations of deeply held principles",
        ],
    },
    TagDefinition {
        name: "Stress / Overwhelm",
        guidelines: &[
            "Articles that could induce feelings of pressure, mental overload, or an inability to cope",
            "Coverage of systemic issues, cascading crises, or compounding problems",
        ],
    },
    TagDefinition {
        name: "Sadness / Grief",
        guidelines: &[
            "Coverage of tragedy, loss of life, personal misfortunes, or heartbreaking stories",
            "Content that evokes deep emotional pain or mourning",
        ],
    },
    TagDefinition {
        name: "Triggering / Traumatic",
        guidelines: &[
            "Content involving violence, abuse, severe accidents, or graphic details",
            "Stories that might re-traumatize readers with past experiences",
        ],
    },
    TagDefinition {
        name: "Hopelessness / Despair",
        guidelines: &[
            "News that suggests a lack of solutions or an overwhelming negative outlook",
            "Content that leaves readers feeling powerless or dejected",
        ],
    },
    TagDefinition {
        name: "Frustration / Helplessness",
        guidelines: &[
            "Stories highlighting systemic barriers or obstacles to change",
            "Content where clear solutions exist but implementation seems impossible",
        ],
    },
    TagDefinition {
        name: "Cynicism / Distrust",
        guidelines: &[
            "Articles that may erode faith in institutions or societal systems",
            "Coverage that reveals systemic failures or institutional betrayal",
        ],
    },
    TagDefinition {
        name: "Nostalgia / Loss of Past",
        guidelines: &[
            "Content that evokes longing for \"better times\"",
            "Stories highlighting significant cultural or societal changes",
        ],
    },
    TagDefinition {
        name: "Social Connection / Belonging",
        guidelines: &[
            "Articles affecting readers' sense of community or group identity",
            "Content that strengthens or challenges social bonds",
        ],
    },
    TagDefinition {
        name: "Guilt / Shame",
        guidelines: &[
            "Stories framed in ways that could induce self-blame or moral conflict",
            "Content addressing social or cultural taboos",
        ],
    },
    TagDefinition {
        name: "Confusion / Uncertainty",
        guidelines: &[
            "Articles creating ambiguity or presenting conflicting information",
            "Content that leaves readers mentally unsettled or questioning",
        ],
    },
    TagDefinition {
        name: "Curiosity / Wonder",
        guidelines: &[
            "Stories that spark intellectual or emotional engagement",
            "Content presenting novel discoveries or fascinating insights",
        ],
    },
    TagDefinition {
        name: "Uplifting / Inspiring",
        guidelines: &[
            "Pieces with a hopeful or encouraging angle",
            "Stories featuring personal triumphs or positive community actions",
        ],
    },
    TagDefinition {
        name: "Compassion / Empathy",
        guidelines: &[
            "Stories focusing on altruism and supportive communities",
            "Content encouraging emotional connection with others",
        ],
    },
    TagDefinition {
        name: "Empowerment / Motivation",
        guidelines: &[
            "Articles highlighting personal agency and success stories",
            "Content providing actionable strategies for improvement",
        ],
    },
];
