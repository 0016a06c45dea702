//! Fixed phrase tables for the assistant. All keywords are stored lowercase so
//! matching only has to lowercase the query.

use crate::models::Intent;

pub(crate) static INTENT_KEYWORDS: [(Intent, &[&str]); 6] = [
    (
        Intent::Incident,
        &[
            "incident", "outage", "p1", "p2", "sev1", "sev2", "alert", "page", "fire", "escalat",
            "on-call", "oncall", "respond", "triage",
        ],
    ),
    (
        Intent::Monitoring,
        &[
            "monitor",
            "observ",
            "metric",
            "dashboard",
            "grafana",
            "dynatrace",
            "prometheus",
            "alert",
            "slo",
            "sli",
            "sla",
            "error budget",
            "apm",
            "rum",
            "synthetic",
            "trace",
            "log",
        ],
    ),
    (
        Intent::Deployment,
        &[
            "deploy", "pipeline", "ci/cd", "harness", "canary", "rollback", "release", "build",
            "artifact", "helm", "docker",
        ],
    ),
    (
        Intent::Infrastructure,
        &[
            "kubernetes",
            "k8s",
            "terraform",
            "pod",
            "container",
            "node",
            "cluster",
            "aws",
            "cloud",
            "iac",
            "infra",
            "scaling",
            "load balanc",
        ],
    ),
    (
        Intent::Reliability,
        &[
            "chaos",
            "fault",
            "resilience",
            "dr",
            "disaster",
            "recovery",
            "failover",
            "rto",
            "rpo",
            "redundan",
            "availability",
            "sre",
            "toil",
        ],
    ),
    (
        Intent::Postmortem,
        &[
            "postmortem",
            "post-mortem",
            "rca",
            "root cause",
            "blameless",
            "retrospect",
            "lessons learned",
            "action item",
        ],
    ),
];

pub(crate) static INTENT_SUGGESTIONS: [(Intent, [&str; 3]); 6] = [
    (
        Intent::Incident,
        [
            "postmortem template",
            "on-call escalation policy",
            "PagerDuty operations guide",
        ],
    ),
    (
        Intent::Monitoring,
        ["SLO/SLI definitions", "Grafana dashboards", "Dynatrace RUM setup"],
    ),
    (
        Intent::Deployment,
        [
            "canary deployment strategy",
            "rollback procedures",
            "Harness pipeline guide",
        ],
    ),
    (
        Intent::Infrastructure,
        [
            "Kubernetes troubleshooting",
            "Terraform IaC standards",
            "AWS reliability pillar",
        ],
    ),
    (
        Intent::Reliability,
        [
            "chaos engineering playbook",
            "disaster recovery plan",
            "error budget policy",
        ],
    ),
    (
        Intent::Postmortem,
        [
            "incident response runbook",
            "blameless postmortem guide",
            "action item tracking",
        ],
    ),
];

pub(crate) const GENERIC_SUGGESTIONS: [&str; 4] = [
    "incident management",
    "observability tools",
    "infrastructure automation",
    "reliability testing",
];

pub(crate) const GREETINGS: [&str; 8] = [
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "howdy",
    "sup",
    "what's up",
];

pub(crate) const HELP_PHRASES: [&str; 5] = [
    "help",
    "what can you do",
    "how does this work",
    "commands",
    "guide me",
];

pub const EMPTY_QUERY_MESSAGE: &str =
    "Please type a question or topic — I'll find the most relevant SRE resources for you.";

pub(crate) const EMPTY_QUERY_SUGGESTIONS: [&str; 3] =
    ["incident response", "monitoring setup", "chaos engineering"];

pub(crate) const GREETING_MESSAGE: &str = "👋 Hey there! I'm the SRE Knowledge Base assistant. \
     Ask me about any SRE topic and I'll point you to the right internal page or external resource.\n\n\
     **Try asking about:**";

pub(crate) const GREETING_SUGGESTIONS: [&str; 5] = [
    "How do I respond to a P1 incident?",
    "Show me chaos engineering resources",
    "Where's the Dynatrace setup guide?",
    "What are our SLO standards?",
    "Kubernetes troubleshooting help",
];

pub(crate) const HELP_MESSAGE: &str = "🔍 **I can help you find SRE resources!**\n\n\
     Just describe what you need in plain language. I search across:\n\
     - 📘 Internal wiki pages\n\
     - 🌐 External SRE resources\n\
     - 🏷️ Tags, categories, and descriptions\n\n\
     **Example queries:**";

pub(crate) const HELP_SUGGESTIONS: [&str; 5] = [
    "incident runbook",
    "Grafana dashboard setup",
    "disaster recovery plan",
    "terraform standards",
    "on-call rotation policy",
];

pub(crate) fn suggestions_for(intent: Intent) -> &'static [&'static str] {
    INTENT_SUGGESTIONS
        .iter()
        .find(|(candidate, _)| *candidate == intent)
        .map(|(_, phrases)| phrases.as_slice())
        .unwrap_or(&[])
}
