use super::AiMlPattern;

pub(crate) fn separation_score(pattern: &AiMlPattern) -> u8 {
    let latency = pattern.typical_latency.as_str();
    let compute = pattern.compute_requirements.as_str();
    let storage = pattern.storage_requirements.as_str();

    let mut score: i8 = 3;

    if latency.contains("hours") || latency.contains("minutes") {
        score += 1;
    } else if latency.contains("milliseconds") {
        score -= 1;
    }

    if compute.contains("intensive") || compute.contains("GPU") {
        score += 1;
    }

    if storage.contains("cost-effective") || storage.contains("throughput") {
        score += 1;
    }

    if compute.contains("elastic") || compute.contains("auto-scaling") {
        score += 1;
    }

    score.clamp(1, 5) as u8
}

pub(crate) fn cost_impact(pattern: &AiMlPattern) -> &'static str {
    let cost = pattern.cost_optimization.to_lowercase();
    if cost.contains("cost optimization") {
        "Significant cost savings possible"
    } else if cost.contains("spot instances") {
        "Major cost optimization opportunities"
    } else {
        "Moderate cost benefits"
    }
}

pub(crate) fn performance_impact(pattern: &AiMlPattern) -> &'static str {
    let latency = pattern.typical_latency.as_str();
    if latency.contains("milliseconds") {
        "Potential performance impact, requires optimization"
    } else if latency.contains("seconds") {
        "Minimal performance impact"
    } else {
        "No significant performance impact"
    }
}

pub(crate) fn complexity_impact(pattern: &AiMlPattern) -> &'static str {
    let approach = pattern.architecture_approach.to_lowercase();
    if approach.contains("distributed") {
        "High complexity, requires careful design"
    } else if approach.contains("pipeline") {
        "Moderate complexity, standard patterns available"
    } else {
        "Low complexity, straightforward implementation"
    }
}

pub(crate) fn scale_benefits(pattern: &AiMlPattern) -> &'static str {
    let compute = pattern.compute_requirements.as_str();
    if compute.contains("elastic") || compute.contains("auto-scaling") {
        "Excellent scaling benefits"
    } else if compute.contains("intensive") {
        "Good scaling benefits for compute"
    } else {
        "Standard scaling benefits"
    }
}

pub(crate) fn success_factors(pattern: &AiMlPattern) -> String {
    let mut factors = Vec::new();

    if pattern.caching_strategy.contains("caching") {
        factors.push("Implement effective caching strategy");
    }

    if pattern.consistency_model.contains("versioning") {
        factors.push("Ensure proper data versioning");
    }

    if pattern.compute_requirements.contains("GPU") {
        factors.push("Optimize for GPU compute efficiency");
    }

    if factors.is_empty() {
        "Follow standard ML infrastructure practices".to_string()
    } else {
        factors.join("; ")
    }
}

pub(crate) fn pitfalls(pattern: &AiMlPattern) -> String {
    let mut pitfalls = Vec::new();
    let name = pattern.pattern_name.to_lowercase();

    if pattern.typical_latency.contains("milliseconds") {
        pitfalls.push("Network latency can significantly impact real-time performance");
    }

    if name.contains("vector") {
        pitfalls.push("Vector transfer overhead can be substantial");
    }

    if name.contains("streaming") {
        pitfalls.push("Stream processing consistency across separated components");
    }

    if pitfalls.is_empty() {
        "Standard implementation risks apply".to_string()
    } else {
        pitfalls.join("; ")
    }
}
