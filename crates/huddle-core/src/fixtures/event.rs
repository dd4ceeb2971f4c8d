//! Event planning scenario.

use crate::scenario::{
    Agent, Badge, Certificate, DecisionOption, LogEntry, RiskLevel, Scenario, ScenarioIcon,
    SupervisorBriefing,
};

pub(super) fn build() -> Scenario {
    Scenario {
        id: "event".to_string(),
        name: "Event Planning".to_string(),
        description: "Collaborate on planning and organizing events, from venue selection to \
                      guest management."
            .to_string(),
        icon: ScenarioIcon::Calendar,
        default_agents: vec![
            Agent::new("P1", "Planner", "Overall Event Coordination").with_tag("Core Team"),
            Agent::new("L1", "Logistics", "Venue and Equipment").with_tag("Core Team"),
            Agent::new("G1", "Guest Manager", "Invitations and RSVP").with_tag("Core Team"),
            Agent::new("S1", "Supervisor", "Event Oversight")
                .with_tag("Team Lead")
                .as_coordinator(),
        ],
        roster: vec![
            Agent::new("BM1", "Budget Manager", "Financial Planning").with_tag("API: QuickBooks"),
            Agent::new("MC1", "Marketing Coordinator", "Event Promotion")
                .with_tag("API: Mailchimp"),
            Agent::new("TS1", "Technical Support", "AV and IT Setup")
                .with_tag("Capability: Tech Troubleshooting"),
        ],
        briefing: SupervisorBriefing {
            protocols: vec![
                "Event Safety Standards".to_string(),
                "Budget Management".to_string(),
                "Vendor Verification".to_string(),
            ],
            certificates: vec![
                Certificate::new("Event Safety", Badge::Shield),
                Certificate::new("Certified Event Planner", Badge::Award),
            ],
        },
        log: vec![
            LogEntry::new(
                "00:00",
                "Supervisor",
                "Initiating event planning process for tech conference",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:05",
                "Planner",
                "Defining event scope and objectives",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:10",
                "Logistics",
                "Researching potential venues",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Provided guidelines on venue requirements, including accessibility and tech \
                 capabilities. Advised on budget considerations.",
            ),
            LogEntry::new(
                "00:15",
                "Guest Manager",
                "Creating initial guest list",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:20",
                "Planner",
                "Developing event schedule",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Ensured balanced schedule with adequate breaks. Recommended contingency time \
                 slots for potential delays.",
            ),
            LogEntry::new(
                "00:25",
                "Logistics",
                "Finalizing venue selection",
                RiskLevel::High,
            )
            .with_intervention(vec![
                DecisionOption::new(
                    "city-convention-center",
                    "City Convention Center",
                    "Large capacity, central location, higher cost.",
                )
                .with_link("https://example.com/convention-center"),
                DecisionOption::new(
                    "tech-hub-auditorium",
                    "Tech Hub Auditorium",
                    "Modern facilities, tech-focused, limited capacity.",
                )
                .with_link("https://example.com/tech-hub"),
                DecisionOption::new(
                    "riverside-conference-hall",
                    "Riverside Conference Hall",
                    "Scenic location, ample parking, slightly remote.",
                )
                .with_link("https://example.com/riverside-hall"),
            ]),
            LogEntry::new(
                "00:30",
                "Guest Manager",
                "Sending out invitations",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:35",
                "Planner",
                "Coordinating with keynote speakers",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Ensured good communication protocols when contacting keynote speakers.",
            ),
            LogEntry::new(
                "00:40",
                "Logistics",
                "Arranging catering services",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:45",
                "Guest Manager",
                "Managing RSVPs and inquiries",
                RiskLevel::Low,
            ),
            LogEntry::new(
                "00:50",
                "Planner",
                "Finalizing event timeline",
                RiskLevel::Medium,
            )
            .with_supervisor_note(
                "Ensured all stakeholders are notified and all conflicts are resolved in a \
                 satisfactory manner.",
            ),
            LogEntry::new(
                "00:55",
                "Supervisor",
                "Reviewing overall event plan",
                RiskLevel::Low,
            ),
        ],
    }
}
