use rusqlite::params;

use crate::error::Result;
use crate::models::{NewArticle, SourceType};

use super::{SqliteStateStore, now_rfc3339};

type SeedRow = (&'static str, &'static str, &'static str, &'static str, SourceType, &'static str);

const DEFAULT_ARTICLES: [SeedRow; 15] = [
    (
        "Incident Response Runbook",
        "Incident Management",
        "Step-by-step guide for P1/P2 incident response including escalation paths and communication templates.",
        "https://confluence.internal/sre/incident-runbook",
        SourceType::Internal,
        "incident,runbook,P1,P2,escalation,on-call",
    ),
    (
        "Chaos Engineering Playbook",
        "Reliability Testing",
        "Framework for designing and executing chaos experiments using AWS FIS and custom fault injection.",
        "https://confluence.internal/sre/chaos-engineering",
        SourceType::Internal,
        "chaos,engineering,fault-injection,FIS,resilience,testing",
    ),
    (
        "SLO/SLI Definition Guide",
        "Observability",
        "How to define, measure, and alert on Service Level Objectives and Indicators across the platform.",
        "https://confluence.internal/sre/slo-sli-guide",
        SourceType::Internal,
        "SLO,SLI,SLA,observability,alerting,error-budget",
    ),
    (
        "Dynatrace Monitoring Setup",
        "Observability",
        "Configuration guide for Dynatrace real user monitoring, synthetic monitors, and custom dashboards.",
        "https://confluence.internal/sre/dynatrace-setup",
        SourceType::Internal,
        "dynatrace,monitoring,RUM,synthetic,dashboard,APM",
    ),
    (
        "Harness CI/CD Pipeline Guide",
        "Deployment",
        "Best practices for configuring Harness pipelines with canary deployments and automated rollback.",
        "https://confluence.internal/sre/harness-pipelines",
        SourceType::Internal,
        "harness,CI/CD,pipeline,canary,deployment,rollback",
    ),
    (
        "Kubernetes Troubleshooting",
        "Infrastructure",
        "Common K8s issues and resolution steps including pod failures, resource limits, and networking.",
        "https://confluence.internal/sre/k8s-troubleshooting",
        SourceType::Internal,
        "kubernetes,k8s,pods,troubleshooting,networking,OOM",
    ),
    (
        "Disaster Recovery Plan",
        "Business Continuity",
        "DR procedures including RTO/RPO targets, failover automation, and recovery validation.",
        "https://confluence.internal/sre/disaster-recovery",
        SourceType::Internal,
        "DR,disaster,recovery,failover,RTO,RPO,business-continuity",
    ),
    (
        "Terraform IaC Standards",
        "Infrastructure",
        "Infrastructure as Code standards, module conventions, and state management best practices.",
        "https://confluence.internal/sre/terraform-standards",
        SourceType::Internal,
        "terraform,IaC,infrastructure,modules,state,automation",
    ),
    (
        "Google SRE Book",
        "External Resources",
        "Google's comprehensive guide to Site Reliability Engineering principles and practices.",
        "https://sre.google/sre-book/table-of-contents/",
        SourceType::External,
        "SRE,google,reliability,principles,toil,error-budget",
    ),
    (
        "Prometheus Monitoring Guide",
        "External Resources",
        "Official Prometheus documentation for metrics collection, PromQL, and alerting.",
        "https://prometheus.io/docs/introduction/overview/",
        SourceType::External,
        "prometheus,metrics,PromQL,alerting,monitoring,TSDB",
    ),
    (
        "PagerDuty Incident Ops Guide",
        "External Resources",
        "PagerDuty's guide to incident operations including on-call best practices and postmortems.",
        "https://response.pagerduty.com/",
        SourceType::External,
        "pagerduty,incident,on-call,postmortem,operations",
    ),
    (
        "AWS Well-Architected Reliability",
        "External Resources",
        "AWS reliability pillar covering fault tolerance, disaster recovery, and scaling strategies.",
        "https://docs.aws.amazon.com/wellarchitected/latest/reliability-pillar/",
        SourceType::External,
        "AWS,reliability,well-architected,fault-tolerance,scaling",
    ),
    (
        "Grafana Dashboard Best Practices",
        "Observability",
        "Guidelines for creating effective Grafana dashboards with proper panel organization and alerting.",
        "https://confluence.internal/sre/grafana-dashboards",
        SourceType::Internal,
        "grafana,dashboard,visualization,alerting,panels",
    ),
    (
        "On-Call Rotation & Escalation Policy",
        "Incident Management",
        "On-call scheduling, escalation tiers, and handoff procedures for the SRE team.",
        "https://confluence.internal/sre/on-call-policy",
        SourceType::Internal,
        "on-call,rotation,escalation,schedule,handoff,PagerDuty",
    ),
    (
        "Postmortem Template & Process",
        "Incident Management",
        "Blameless postmortem template with timeline, root cause analysis, and action item tracking.",
        "https://confluence.internal/sre/postmortem-template",
        SourceType::Internal,
        "postmortem,blameless,RCA,root-cause,timeline,action-items",
    ),
];

/// The starter SRE catalog written into an empty knowledge base.
#[must_use]
pub fn default_articles() -> Vec<NewArticle> {
    DEFAULT_ARTICLES
        .iter()
        .map(|(title, category, description, url, source_type, tags)| {
            NewArticle::new(*title, *category, *url)
                .with_description(*description)
                .with_source_type(*source_type)
                .with_tags(*tags)
        })
        .collect()
}

impl SqliteStateStore {
    /// Inserts the default catalog when no article exists yet; returns how many
    /// rows were written.
    pub fn seed_default_articles(&self) -> Result<usize> {
        let articles = default_articles();
        self.with_tx(|tx| {
            let existing: i64 =
                tx.query_row("SELECT COUNT(*) FROM kb_articles", [], |row| row.get(0))?;
            if existing > 0 {
                return Ok(0);
            }
            let now = now_rfc3339();
            let mut stmt = tx.prepare(
                r"
                INSERT INTO kb_articles(title, category, description, url, source_type, tags, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
            )?;
            for article in &articles {
                stmt.execute(params![
                    article.title,
                    article.category,
                    article.description,
                    article.url,
                    article.source_type.as_str(),
                    article.tags,
                    now,
                ])?;
            }
            Ok(articles.len())
        })
    }
}
