//! Research paper assistance scenario.

use crate::scenario::{
    Agent, Badge, Certificate, DecisionOption, LogEntry, RiskLevel, Scenario, ScenarioIcon,
    SupervisorBriefing,
};

pub(super) fn build() -> Scenario {
    Scenario {
        id: "research".to_string(),
        name: "Research Paper Assistance".to_string(),
        description: "Collaborate on academic research, including literature review, data \
                      analysis, and paper writing."
            .to_string(),
        icon: ScenarioIcon::Document,
        default_agents: vec![
            Agent::new("R1", "Researcher", "Primary Investigator").with_tag("Core Team"),
            Agent::new("P1", "Proof Reader", "Language and Style Check").with_tag("Core Team"),
            Agent::new("RV1", "Reviewer", "Peer Review").with_tag("Core Team"),
            Agent::new("S1", "Supervisor", "Research Oversight")
                .with_tag("Team Lead")
                .as_coordinator(),
        ],
        roster: vec![
            Agent::new("DA1", "Data Analyst", "Statistical Analysis").with_tag("API: R Studio"),
            Agent::new("LR1", "Literature Reviewer", "Comprehensive Literature Search")
                .with_tag("API: Google Scholar"),
            Agent::new("VD1", "Visualization Designer", "Data Visualization")
                .with_tag("API: Tableau"),
        ],
        briefing: SupervisorBriefing {
            protocols: vec![
                "Ethical Research Standards".to_string(),
                "Peer Review Process".to_string(),
                "Data Integrity".to_string(),
            ],
            certificates: vec![
                Certificate::new("Ethical Research", Badge::Shield),
                Certificate::new("Academic Integrity", Badge::Award),
            ],
        },
        log: vec![
            LogEntry::new(
                "00:00",
                "Supervisor",
                "Initiating research paper assistance process",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:05",
                "Researcher",
                "Defining research question on climate change impact",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:10",
                "Researcher",
                "Conducting literature review",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Provided guidance on ensuring comprehensive coverage of relevant literature. \
                 Emphasized the importance of critically evaluating sources.",
            ),
            LogEntry::new(
                "00:15",
                "Proof Reader",
                "Reviewing initial research proposal",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:20",
                "Researcher",
                "Analyzing climate data from multiple sources",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Advised on data integrity checks and cross-validation methods. Ensured \
                 adherence to ethical data handling practices.",
            ),
            LogEntry::new(
                "00:25",
                "Supervisor",
                "Checking data analysis methodology",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:30",
                "Researcher",
                "Writing initial draft of findings",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Guided on maintaining objectivity in reporting results. Recommended clear \
                 documentation of assumptions and limitations.",
            ),
            LogEntry::new(
                "00:35",
                "Researcher",
                "Discovered conflicting data in primary sources",
                RiskLevel::High,
            )
            .with_intervention(vec![
                DecisionOption::new(
                    "additional-sources",
                    "Seek additional sources",
                    "Look for more primary sources to resolve the conflict.",
                )
                .with_link("https://example.com/research-databases"),
                DecisionOption::new(
                    "expert-consult",
                    "Consult field expert",
                    "Reach out to a known expert in the field for clarification.",
                )
                .with_link("https://example.com/expert-directory"),
                DecisionOption::new(
                    "acknowledge-limitations",
                    "Acknowledge limitations in paper",
                    "Continue with the research but acknowledge the conflicting data in the paper.",
                )
                .with_link("https://example.com/research-writing-best-practices"),
            ]),
            // Duplicate timestamp with the entry above is intentional fixture
            // data: timestamps are display labels, order is array order.
            LogEntry::new(
                "00:35",
                "Proof Reader",
                "Editing draft for clarity and style",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:40",
                "Reviewer",
                "Conducting peer review of the draft",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Solicited help from third-party peer review agents to ensure unbiased review \
                 process.",
            ),
            LogEntry::new(
                "00:45",
                "Researcher",
                "Addressing reviewer comments",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:50",
                "Supervisor",
                "Final review of the paper",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:55",
                "Researcher",
                "Submitting paper to journal",
                RiskLevel::Low,
            ),
        ],
    }
}
