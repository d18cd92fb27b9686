//! Personalized career advice derived from the top recommendation

use crate::recommend::{Advice, MatchResult, SkillAnalysis};

const WELL_QUALIFIED_SCORE: f64 = 80.0;
const GOOD_FOUNDATION_SCORE: f64 = 60.0;
const LOW_DIVERSITY: f64 = 0.5;
const MISSING_SKILLS_IN_ADVICE: usize = 3;

pub fn personalized_advice(analysis: &SkillAnalysis, recommendations: &[MatchResult]) -> Advice {
    let mut advice = Advice::default();

    match recommendations.first() {
        Some(top) if top.match_score >= WELL_QUALIFIED_SCORE => {
            advice.current_position = format!("You're well-qualified for {} roles!", top.job_title);
            advice.next_steps = vec![
                format!("Focus on gaining experience in {} positions", top.job_title),
                "Build a portfolio showcasing your projects".to_string(),
            ];
        }
        Some(top) if top.match_score >= GOOD_FOUNDATION_SCORE => {
            let missing: Vec<&str> = top
                .missing_skills
                .iter()
                .take(MISSING_SKILLS_IN_ADVICE)
                .map(String::as_str)
                .collect();

            advice.current_position = format!("You have a good foundation for {} roles", top.job_title);
            advice.next_steps = vec![
                format!("Learn the missing skills: {}", missing.join(", ")),
                "Take relevant courses and certifications".to_string(),
            ];
        }
        _ => {
            advice.current_position =
                "You may need to develop more skills for your target roles".to_string();
            advice.next_steps = vec![
                "Focus on building core technical skills".to_string(),
                "Consider entry-level positions to gain experience".to_string(),
            ];
        }
    }

    if !analysis.in_demand_skills.is_empty() {
        advice.market_insights.push(format!(
            "Great! You have in-demand skills: {}",
            analysis.in_demand_skills.join(", ")
        ));
    }

    if analysis.skill_diversity_score < LOW_DIVERSITY {
        advice
            .skill_gaps
            .push("Consider diversifying your skill set across different domains".to_string());
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, score: f64, missing: &[&str]) -> MatchResult {
        MatchResult {
            job_id: title.to_lowercase(),
            job_title: title.to_string(),
            description: String::new(),
            match_score: score,
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            sector: "technology".to_string(),
        }
    }

    fn analysis(in_demand: &[&str], diversity: f64) -> SkillAnalysis {
        SkillAnalysis {
            total_skills: 0,
            skill_categories: Vec::new(),
            strongest_category: None,
            in_demand_skills: in_demand.iter().map(|s| s.to_string()).collect(),
            skill_diversity_score: diversity,
        }
    }

    #[test]
    fn test_well_qualified() {
        let advice = personalized_advice(&analysis(&[], 1.0), &[result("Data Scientist", 80.0, &[])]);
        assert_eq!(advice.current_position, "You're well-qualified for Data Scientist roles!");
        assert_eq!(
            advice.next_steps[0],
            "Focus on gaining experience in Data Scientist positions"
        );
        assert!(advice.skill_gaps.is_empty());
        assert!(advice.market_insights.is_empty());
    }

    #[test]
    fn test_good_foundation_lists_three_missing() {
        let top = result("Web Developer", 65.5, &["html", "css", "javascript", "databases"]);
        let advice = personalized_advice(&analysis(&[], 1.0), &[top]);

        assert_eq!(advice.current_position, "You have a good foundation for Web Developer roles");
        assert_eq!(advice.next_steps[0], "Learn the missing skills: html, css, javascript");
        assert_eq!(advice.next_steps[1], "Take relevant courses and certifications");
    }

    #[test]
    fn test_low_score_and_no_recommendations() {
        for recommendations in [vec![result("Nurse", 59.99, &[])], Vec::new()] {
            let advice = personalized_advice(&analysis(&[], 1.0), &recommendations);
            assert_eq!(
                advice.current_position,
                "You may need to develop more skills for your target roles"
            );
            assert_eq!(advice.next_steps.len(), 2);
        }
    }

    #[test]
    fn test_insights_and_gaps() {
        let advice = personalized_advice(&analysis(&["python", "sql"], 2.0 / 6.0), &[]);
        assert_eq!(
            advice.market_insights,
            vec!["Great! You have in-demand skills: python, sql"]
        );
        assert_eq!(
            advice.skill_gaps,
            vec!["Consider diversifying your skill set across different domains"]
        );
    }
}
