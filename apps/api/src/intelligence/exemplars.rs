//! Ideal-response exemplar bank.
//!
//! Gold-standard interview answers used as comparison anchors for response
//! scoring. Each exemplar carries the vocabulary, structural elements, depth
//! indicators and red flags the scorer checks a submission against.

use serde::Serialize;

/// Seniority band an exemplar answer was written at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLevel {
    Junior,
    Mid,
    Senior,
}

/// A gold-standard answer for one (skill, question type) pair.
#[derive(Debug, Clone, Serialize)]
pub struct IdealResponse {
    pub question_type: &'static str,
    pub skill: &'static str,
    pub level: ResponseLevel,
    pub response: &'static str,
    pub key_elements: &'static [&'static str],
    pub vocabulary_signals: &'static [&'static str],
    pub depth_indicators: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

pub const IDEAL_RESPONSES: &[IdealResponse] = &[
    IdealResponse {
        question_type: "experience-probing",
        skill: "react",
        level: ResponseLevel::Senior,
        response: "I've been working with React for about 5 years now, starting when hooks \
            were first introduced. My most significant project was architecting the frontend \
            for a real-time analytics dashboard at my current company. We had to handle \
            thousands of data points updating every second while maintaining 60fps rendering.\
            \n\nI led a team of 4 developers and made key architectural decisions around \
            state management - we chose Zustand over Redux after benchmarking because of its \
            simpler mental model and better performance for our use case. We implemented \
            custom hooks for data fetching with automatic retry logic and optimistic updates.\
            \n\nThe impact was measurable: we reduced initial load time by 40% through code \
            splitting and lazy loading, and user engagement increased by 25% because the \
            dashboard felt more responsive. I also mentored two junior developers on React \
            best practices and conducted internal workshops on performance optimization.",
        key_elements: &[
            "specific time duration",
            "named project with context",
            "team leadership",
            "architectural decisions with rationale",
            "quantified impact",
            "teaching/mentoring experience",
        ],
        vocabulary_signals: &[
            "architecting",
            "benchmarking",
            "state management",
            "code splitting",
            "lazy loading",
            "optimistic updates",
            "custom hooks",
            "performance optimization",
        ],
        depth_indicators: &[
            "explains WHY decisions were made",
            "mentions alternatives considered",
            "provides metrics",
            "shows progression over time",
        ],
        red_flags: &[
            "vague timeframes",
            "no specific projects",
            "can't explain decisions",
            "no metrics",
        ],
    },
    IdealResponse {
        question_type: "problem-solving",
        skill: "react",
        level: ResponseLevel::Senior,
        response: "When I encounter excessive re-renders, I follow a systematic debugging \
            approach. First, I'd use React DevTools Profiler to identify which components \
            are re-rendering and how often. The flame graph helps me pinpoint the expensive \
            renders.\n\nOnce I identify the culprits, I look at three main areas: dependency \
            arrays in useEffect and useMemo, unnecessary prop drilling causing cascading \
            re-renders, and state updates that could be batched.\n\nFor a concrete example, \
            I recently fixed a performance issue where our product list was re-rendering on \
            every keystroke in an unrelated search box. The root cause was a context \
            provider too high in the tree. I solved it by splitting the context - separating \
            the frequently-changing search state from the stable product data. This reduced \
            renders by 80% and made the UI feel instant.\n\nI'd also consider React.memo for \
            pure components, but I'm careful because memoization has its own cost. I prefer \
            fixing the architecture first.",
        key_elements: &[
            "systematic approach",
            "specific tools mentioned",
            "multiple areas to investigate",
            "concrete example",
            "trade-off awareness",
        ],
        vocabulary_signals: &[
            "React DevTools",
            "Profiler",
            "flame graph",
            "dependency arrays",
            "prop drilling",
            "context provider",
            "React.memo",
            "memoization",
        ],
        depth_indicators: &[
            "shows debugging methodology",
            "mentions specific tools",
            "provides real example",
            "discusses trade-offs",
        ],
        red_flags: &[
            "just says \"use React.memo\"",
            "no systematic approach",
            "can't provide example",
        ],
    },
    IdealResponse {
        question_type: "practical-application",
        skill: "salesforce",
        level: ResponseLevel::Senior,
        response: "I designed and implemented a complete deal registration workflow for our \
            partner ecosystem using Salesforce. The challenge was that we had 500+ partners \
            submitting deals, but the manual review process was causing a 5-day average \
            approval time, leading to partner frustration.\n\nI built a custom object \
            structure with Deal Registration, Partner Account, and Territory mapping objects \
            linked through lookup relationships. The approval process used a combination of \
            Process Builder for simple routing and Apex triggers for complex territory \
            overlap detection.\n\nThe key innovation was implementing a scoring algorithm in \
            Apex that auto-approved deals meeting certain criteria - established partners, \
            clear territory, no conflicts - while flagging edge cases for manual review. I \
            also built a partner portal using Experience Cloud so partners could track their \
            deals in real-time.\n\nResults: approval time dropped from 5 days to 4 hours for \
            clean deals, partner satisfaction scores increased 35%, and we processed 2x more \
            deals with the same ops team size.",
        key_elements: &[
            "clear problem statement",
            "technical implementation details",
            "innovation/creative solution",
            "quantified results",
            "scalability consideration",
        ],
        vocabulary_signals: &[
            "custom objects",
            "lookup relationships",
            "Process Builder",
            "Apex triggers",
            "Experience Cloud",
            "approval process",
            "partner portal",
        ],
        depth_indicators: &[
            "understands Salesforce architecture",
            "can discuss object relationships",
            "knows automation tools",
            "built for scale",
        ],
        red_flags: &[
            "only mentions point-and-click",
            "no custom development",
            "can't discuss object model",
        ],
    },
    IdealResponse {
        question_type: "experience-probing",
        skill: "partner operations",
        level: ResponseLevel::Senior,
        response: "I've spent the last 4 years building and scaling partner operations \
            programs. At my current company, I inherited a partner ecosystem that was \
            essentially just a spreadsheet and transformed it into a fully automated, \
            data-driven operation supporting $200M in partner-influenced revenue.\n\nMy \
            approach starts with the operating model - I established clear tier \
            classifications based on performance metrics, not just revenue. I built the \
            entire deal registration system in Salesforce with custom scoring algorithms, \
            and integrated it with Crossbeam for account mapping and overlap detection.\
            \n\nThe operational cadence I implemented includes quarterly business reviews, \
            weekly deal desk meetings, and real-time dashboards for territory managers. I \
            also established partner enablement as a core function - creating certification \
            programs, sales playbooks, and co-marketing frameworks.\n\nKey metrics I moved: \
            deal registration volume increased 150%, partner attach rate went from 23% to \
            41%, and we maintained 98% data accuracy across 50,000+ partner accounts. I \
            currently manage a team of 4 partner ops specialists.",
        key_elements: &[
            "clear progression narrative",
            "operational frameworks",
            "tool expertise",
            "metrics-driven approach",
            "team management",
        ],
        vocabulary_signals: &[
            "operating model",
            "tier classifications",
            "deal registration",
            "Crossbeam",
            "QBR",
            "deal desk",
            "partner attach rate",
            "enablement",
            "certification",
        ],
        depth_indicators: &[
            "understands full partner lifecycle",
            "can discuss metrics and KPIs",
            "knows partner tech stack",
            "has built systems from scratch",
        ],
        red_flags: &[
            "only tactical experience",
            "no metrics",
            "unfamiliar with partner tools",
        ],
    },
    IdealResponse {
        question_type: "problem-solving",
        skill: "technical program management",
        level: ResponseLevel::Senior,
        response: "When three teams have conflicting priorities, I first work to understand \
            the root cause - usually it's either resource contention, unclear ownership, or \
            misaligned incentives. My approach is structured:\n\nFirst, I bring the tech \
            leads together to map dependencies explicitly. We create a dependency matrix \
            showing exactly where the conflicts are. Often, just visualizing this reveals \
            solutions - maybe Team A can reorder their work to unblock Team B without \
            impacting their timeline.\n\nIf it's a true resource conflict, I escalate with \
            data. I prepare a one-pager showing the business impact of each team's work, the \
            cost of delay, and proposed resolution options. I never just present a problem - \
            I bring at least two viable solutions with trade-offs clearly articulated.\
            \n\nFor example, I recently resolved a conflict where Platform, Product, and \
            Data teams all needed the same senior engineer. The solution was a time-boxing \
            approach - 2 weeks with Platform for critical architecture work, then full-time \
            with Product, with Data team getting async support. I documented this in a \
            shared tracker so everyone knew the commitment.\n\nThe key is treating it as a \
            optimization problem, not a political one. Data and transparency usually resolve \
            80% of conflicts.",
        key_elements: &[
            "structured approach",
            "root cause analysis",
            "visualization technique",
            "escalation with data",
            "concrete example",
            "philosophical approach",
        ],
        vocabulary_signals: &[
            "dependency matrix",
            "resource contention",
            "time-boxing",
            "trade-offs",
            "escalation",
            "one-pager",
            "async support",
            "optimization",
        ],
        depth_indicators: &[
            "systematic methodology",
            "conflict resolution skills",
            "stakeholder management",
            "documentation habits",
        ],
        red_flags: &[
            "would just escalate",
            "no framework",
            "can't provide example",
        ],
    },
];
