//! GitHub issue resolution scenario.

use crate::scenario::{
    Agent, Badge, Certificate, DecisionOption, LogEntry, RiskLevel, Scenario, ScenarioIcon,
    SupervisorBriefing,
};

pub(super) fn build() -> Scenario {
    Scenario {
        id: "github".to_string(),
        name: "GitHub Issue Resolution".to_string(),
        description: "Collaborate on resolving complex GitHub issues, involving code review, \
                      bug fixing, and quality assurance."
            .to_string(),
        icon: ScenarioIcon::SourceControl,
        default_agents: vec![
            Agent::new("D1", "Developer", "Code Implementation").with_tag("Core Team"),
            Agent::new("QA1", "QA Engineer", "Quality Assurance").with_tag("Core Team"),
            Agent::new("T1", "Tester", "Test Case Execution").with_tag("Core Team"),
            Agent::new("S1", "Supervisor", "Oversight and Coordination")
                .with_tag("Team Lead")
                .as_coordinator(),
        ],
        roster: vec![
            Agent::new("CA1", "Code Analyzer", "Static Code Analysis").with_tag("API: SonarQube"),
            Agent::new("SI1", "Security Inspector", "Security Vulnerability Check")
                .with_tag("API: Snyk"),
            Agent::new("PM1", "Project Manager", "Project Coordination")
                .with_tag("Capability: Task Tracking"),
        ],
        briefing: SupervisorBriefing {
            protocols: vec![
                "Code Review Standards".to_string(),
                "Continuous Integration".to_string(),
                "Security Compliance".to_string(),
            ],
            certificates: vec![
                Certificate::new("Security Compliance", Badge::Shield),
                Certificate::new("Code Quality Assurance", Badge::Award),
            ],
        },
        log: vec![
            LogEntry::new(
                "00:00",
                "Supervisor",
                "Initiating GitHub issue resolution process",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:05",
                "Developer",
                "Analyzing issue #1234: \"App crashes on startup\"",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:10",
                "QA Engineer",
                "Reproducing the issue on multiple devices",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Ensured QA Engineer follows the established testing protocol. Advised on \
                 prioritizing critical device configurations.",
            ),
            LogEntry::new(
                "00:15",
                "Tester",
                "Creating test cases for the startup process",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:20",
                "Developer",
                "Identifying potential cause in initialization code",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Guided Developer to adhere to secure coding practices. Recommended additional \
                 code review for the identified section.",
            ),
            LogEntry::new(
                "00:25",
                "Supervisor",
                "Reviewing Developer's findings",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:30",
                "Developer",
                "Encountered a critical security vulnerability",
                RiskLevel::High,
            )
            .with_intervention(vec![
                DecisionOption::new(
                    "patch",
                    "Apply emergency patch",
                    "Quickly patch the vulnerability with a hotfix.",
                )
                .with_link("https://example.com/security-best-practices"),
                DecisionOption::new(
                    "revert",
                    "Revert to previous version",
                    "Roll back to the last known secure version.",
                )
                .with_link("https://example.com/version-control-guide"),
                DecisionOption::new(
                    "analyze",
                    "Conduct thorough analysis",
                    "Pause deployment and analyze the vulnerability in depth.",
                )
                .with_link("https://example.com/security-analysis-tools"),
            ]),
            LogEntry::new(
                "00:35",
                "QA Engineer",
                "Verifying fix on test devices",
                RiskLevel::Low,
            ),
            LogEntry::new("00:40", "Tester", "Running regression tests", RiskLevel::Low),
            LogEntry::new(
                "00:45",
                "Supervisor",
                "Reviewing test results and approving fix",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:50",
                "Developer",
                "Pushing fix to main branch",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:55",
                "Supervisor",
                "Closing GitHub issue #1234",
                RiskLevel::Low,
            ),
        ],
    }
}
