//! Deterministic results used whenever the completion path fails. Each
//! function returns the same shape as its AI counterpart.

use std::collections::HashSet;

use crate::domain::{
    food::entities::Food,
    nutrition::{
        entities::{
            BalanceReport, CostTip, CostTips, DayPlan, MealPlan, MealTotals, NutritionGoals,
            PeriodTotals, PlannedMeal, Recommendation, SwapSuggestion, TrendReport,
        },
        value_objects::{ActivityLevel, HealthContext, MoodEnergy, TrendEntry, UserProfile},
    },
    user_preference::entities::UserPreference,
};

pub const FALLBACK_SCORE: f64 = 0.7;
pub const MAX_SWAPS: usize = 3;

const REFERENCE_DAILY_KCAL: f64 = 2000.0;
const MEAL_SHARE_OF_DAILY_KCAL: f64 = 0.3;
const PROTEIN_PER_MEAL_G: f64 = 20.0;

/// Mifflin-St Jeor basal metabolic rate.
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age) + 5.0
}

pub fn nutrition_goals(profile: &UserProfile, health: &HealthContext) -> NutritionGoals {
    let calories = basal_metabolic_rate(profile) * health.activity_level.factor();

    NutritionGoals::from_calories(
        calories.max(0.0) as u32,
        "Basic calculation based on BMR and activity level",
    )
}

pub fn meal_totals(foods: &[Food]) -> MealTotals {
    foods.iter().fold(MealTotals::default(), |mut totals, food| {
        totals.calories += f64::from(food.kcal);
        totals.protein_g += food.macros.protein_g;
        totals.carbs_g += food.macros.carbs_g;
        totals.fat_g += food.macros.fat_g;
        totals
    })
}

pub fn meal_balance(totals: &MealTotals, goals: &NutritionGoals) -> BalanceReport {
    let daily_kcal = if goals.calories > 0 {
        f64::from(goals.calories)
    } else {
        REFERENCE_DAILY_KCAL
    };

    let calorie_score = (totals.calories / (daily_kcal * MEAL_SHARE_OF_DAILY_KCAL)).min(1.0);
    let protein_score = (totals.protein_g / PROTEIN_PER_MEAL_G).min(1.0);
    let low_protein = totals.protein_g < 15.0;

    BalanceReport {
        balance_score: (calorie_score + protein_score) / 2.0,
        strengths: if totals.calories > 300.0 {
            vec!["adequate calories".to_string()]
        } else {
            vec![]
        },
        weaknesses: if low_protein {
            vec!["low protein".to_string()]
        } else {
            vec![]
        },
        suggestions: if low_protein {
            vec!["add protein".to_string()]
        } else {
            vec![]
        },
        next_meal_focus: "balance".to_string(),
    }
}

/// Intense activity favours protein, low energy favours calories, anything
/// else keeps catalog order.
pub fn recommendations(
    health: &HealthContext,
    catalog: &[Food],
    limit: usize,
) -> Vec<Recommendation> {
    let (mut picks, reason): (Vec<&Food>, &str) = if health.activity_level == ActivityLevel::Intense
    {
        let mut picks: Vec<&Food> = catalog
            .iter()
            .filter(|food| food.macros.protein_g > 25.0)
            .collect();
        picks.sort_by(|a, b| b.macros.protein_g.total_cmp(&a.macros.protein_g));
        (picks, "High protein for intense activity")
    } else if health.mood_energy == MoodEnergy::Low {
        let mut picks: Vec<&Food> = catalog.iter().filter(|food| food.kcal > 300).collect();
        picks.sort_by(|a, b| b.kcal.cmp(&a.kcal));
        (picks, "Energy-dense comfort food for low energy")
    } else {
        (catalog.iter().collect(), "Balanced nutrition")
    };

    picks.truncate(limit);
    picks
        .into_iter()
        .map(|food| Recommendation {
            food_id: food.id.clone(),
            reason: reason.to_string(),
            score: FALLBACK_SCORE,
        })
        .collect()
}

/// Lighter foods without disliked tags, highest protein first.
pub fn swaps(current: &Food, pref: &UserPreference, catalog: &[Food]) -> Vec<SwapSuggestion> {
    let mut candidates: Vec<&Food> = catalog
        .iter()
        .filter(|food| food.id != current.id)
        .filter(|food| food.kcal < current.kcal)
        .filter(|food| !food.has_any_tag(&pref.dislikes))
        .collect();
    candidates.sort_by(|a, b| b.macros.protein_g.total_cmp(&a.macros.protein_g));

    candidates
        .into_iter()
        .take(MAX_SWAPS)
        .map(|food| SwapSuggestion {
            food_id: food.id.clone(),
            name: food.name.clone(),
            improvement: format!("{} kcal lighter", current.kcal - food.kcal),
            nutrition_gain: format!("{}g protein", food.macros.protein_g),
        })
        .collect()
}

/// The first three catalog entries fill breakfast, lunch and dinner each day.
pub fn meal_plan(catalog: &[Food], days: u32) -> MealPlan {
    let slot = |index: usize| {
        catalog.get(index).map(|food| PlannedMeal {
            food_id: food.id.clone(),
            reason: "Available option".to_string(),
        })
    };

    MealPlan {
        days: (1..=days)
            .map(|day| DayPlan {
                day,
                breakfast: slot(0),
                lunch: slot(1),
                dinner: slot(2),
            })
            .collect(),
        shopping_list: vec!["basic ingredients".to_string()],
        total_weekly_cost: "$30".to_string(),
    }
}

/// Totals are weighted by each entry's servings.
pub fn period_totals(entries: &[TrendEntry]) -> PeriodTotals {
    let mut totals = entries
        .iter()
        .fold(PeriodTotals::default(), |mut totals, entry| {
            totals.total_calories += f64::from(entry.food.kcal) * entry.servings;
            totals.total_protein += entry.food.macros.protein_g * entry.servings;
            totals.total_carbs += entry.food.macros.carbs_g * entry.servings;
            totals.total_fat += entry.food.macros.fat_g * entry.servings;
            totals
        });

    let days: HashSet<_> = entries.iter().map(|entry| entry.date).collect();
    totals.days_logged = u32::try_from(days.len()).unwrap_or(u32::MAX);
    totals.meals_logged = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    if totals.days_logged > 0 {
        totals.avg_daily_calories = totals.total_calories / f64::from(totals.days_logged);
    }

    totals
}

pub fn trend_report(totals: &PeriodTotals) -> TrendReport {
    TrendReport {
        trends: if totals.days_logged > 3 {
            vec!["consistent logging".to_string()]
        } else {
            vec![]
        },
        concerns: if totals.avg_daily_calories < 1200.0 {
            vec!["low calories".to_string()]
        } else {
            vec![]
        },
        strengths: if totals.meals_logged > 5 {
            vec!["regular logging".to_string()]
        } else {
            vec![]
        },
        recommendations: vec!["maintain current habits".to_string()],
        score: 0.6,
    }
}

pub fn cost_tips() -> CostTips {
    CostTips {
        tips: vec![
            CostTip {
                category: "general".to_string(),
                tip: "Plan meals weekly to reduce waste".to_string(),
                savings: "$10/week".to_string(),
            },
            CostTip {
                category: "protein".to_string(),
                tip: "Buy protein in bulk and freeze".to_string(),
                savings: "$15/week".to_string(),
            },
        ],
        total_potential_savings: "$25/week".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::entities::{Availability, FoodCategory, Macros, PriceTier};
    use chrono::NaiveDate;

    fn food(id: &str, kcal: u32, protein_g: f64, tags: &[&str]) -> Food {
        Food {
            id: id.to_string(),
            name: format!("Name of {id}"),
            category: FoodCategory::Bowl,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            macros: Macros {
                protein_g,
                carbs_g: 30.0,
                fat_g: 10.0,
            },
            kcal,
            availability: Availability::default(),
            price_tier: PriceTier::Medium,
        }
    }

    fn entry(food: Food, day: u32, servings: f64) -> TrendEntry {
        TrendEntry {
            food,
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            servings,
        }
    }

    #[test]
    fn goals_follow_mifflin_st_jeor() {
        let profile = UserProfile::default();
        let health = HealthContext::default();

        assert_eq!(basal_metabolic_rate(&profile), 1617.5);

        let goals = nutrition_goals(&profile, &health);
        assert_eq!(goals.calories, 2507);
        assert_eq!(goals.protein_g, 156);
        assert_eq!(goals.carbs_g, 282);
        assert_eq!(goals.fat_g, 83);
        assert_eq!(goals.fiber_g, 25);
        assert_eq!(goals, nutrition_goals(&profile, &health));
    }

    #[test]
    fn goals_scale_with_activity() {
        let profile = UserProfile::default();
        let light = HealthContext {
            activity_level: ActivityLevel::Light,
            ..HealthContext::default()
        };
        let intense = HealthContext {
            activity_level: ActivityLevel::Intense,
            ..HealthContext::default()
        };

        assert_eq!(nutrition_goals(&profile, &light).calories, 2224);
        assert_eq!(nutrition_goals(&profile, &intense).calories, 2790);
    }

    #[test]
    fn meal_balance_averages_calorie_and_protein_scores() {
        let foods = vec![food("a", 300, 10.0, &[])];
        let report = meal_balance(&meal_totals(&foods), &NutritionGoals::from_calories(2000, ""));

        // 300 / 600 = 0.5, 10 / 20 = 0.5
        assert!((report.balance_score - 0.5).abs() < 1e-9);
        assert!(report.strengths.is_empty());
        assert_eq!(report.weaknesses, vec!["low protein".to_string()]);
        assert_eq!(report.suggestions, vec!["add protein".to_string()]);
        assert_eq!(report.next_meal_focus, "balance");
    }

    #[test]
    fn meal_balance_caps_scores_and_guards_zero_goal() {
        let foods = vec![food("a", 900, 40.0, &[])];
        let report = meal_balance(&meal_totals(&foods), &NutritionGoals::from_calories(0, ""));

        assert_eq!(report.balance_score, 1.0);
        assert_eq!(report.strengths, vec!["adequate calories".to_string()]);
        assert!(report.weaknesses.is_empty());
    }

    #[test]
    fn intense_activity_prefers_protein() {
        let catalog = vec![
            food("a", 400, 30.0, &[]),
            food("b", 400, 20.0, &[]),
            food("c", 400, 40.0, &[]),
            food("d", 400, 26.0, &[]),
        ];
        let health = HealthContext {
            activity_level: ActivityLevel::Intense,
            ..HealthContext::default()
        };

        let recs = recommendations(&health, &catalog, 5);
        let ids: Vec<_> = recs.iter().map(|r| r.food_id.as_str()).collect();

        assert_eq!(ids, vec!["c", "a", "d"]);
        assert!(recs.iter().all(|r| r.score == FALLBACK_SCORE));
    }

    #[test]
    fn low_mood_prefers_calories() {
        let catalog = vec![
            food("a", 250, 10.0, &[]),
            food("b", 500, 10.0, &[]),
            food("c", 350, 10.0, &[]),
        ];
        let health = HealthContext {
            mood_energy: MoodEnergy::Low,
            ..HealthContext::default()
        };

        let ids: Vec<_> = recommendations(&health, &catalog, 1)
            .into_iter()
            .map(|r| r.food_id)
            .collect();
        assert_eq!(ids, vec!["b".to_string()]);
    }

    #[test]
    fn balanced_branch_keeps_catalog_order() {
        let catalog = vec![food("x", 100, 1.0, &[]), food("y", 200, 2.0, &[]), food("z", 300, 3.0, &[])];

        let ids: Vec<_> = recommendations(&HealthContext::default(), &catalog, 2)
            .into_iter()
            .map(|r| r.food_id)
            .collect();
        assert_eq!(ids, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn swaps_skip_heavier_and_disliked_foods() {
        let current = food("cur", 500, 20.0, &[]);
        let catalog = vec![
            current.clone(),
            food("heavy", 600, 50.0, &[]),
            food("disliked", 300, 40.0, &["Spicy"]),
            food("light", 200, 10.0, &[]),
            food("lean", 350, 30.0, &[]),
        ];
        let pref = UserPreference {
            dislikes: vec!["spicy".to_string()],
            ..UserPreference::default()
        };

        let swaps = swaps(&current, &pref, &catalog);
        let ids: Vec<_> = swaps.iter().map(|s| s.food_id.as_str()).collect();

        assert_eq!(ids, vec!["lean", "light"]);
        assert_eq!(swaps[0].improvement, "150 kcal lighter");
    }

    #[test]
    fn meal_plan_uses_first_three_foods() {
        let catalog = vec![food("a", 1, 1.0, &[]), food("b", 1, 1.0, &[])];
        let plan = meal_plan(&catalog, 2);

        assert_eq!(plan.days.len(), 2);
        assert_eq!(plan.days[1].day, 2);
        assert_eq!(plan.days[0].breakfast.as_ref().unwrap().food_id, "a");
        assert_eq!(plan.days[0].lunch.as_ref().unwrap().food_id, "b");
        assert!(plan.days[0].dinner.is_none());
        assert_eq!(plan.shopping_list, vec!["basic ingredients".to_string()]);
        assert_eq!(plan.total_weekly_cost, "$30");
    }

    #[test]
    fn period_totals_weight_servings_and_count_days() {
        let entries = vec![
            entry(food("a", 400, 20.0, &[]), 1, 1.0),
            entry(food("b", 200, 10.0, &[]), 1, 2.0),
            entry(food("a", 400, 20.0, &[]), 2, 0.5),
        ];
        let totals = period_totals(&entries);

        assert_eq!(totals.total_calories, 1000.0);
        assert_eq!(totals.total_protein, 50.0);
        assert_eq!(totals.days_logged, 2);
        assert_eq!(totals.meals_logged, 3);
        assert_eq!(totals.avg_daily_calories, 500.0);
    }

    #[test]
    fn trend_report_flags_habits() {
        let entries: Vec<_> = (1..=6)
            .map(|day| entry(food("a", 1500, 20.0, &[]), day, 1.0))
            .collect();
        let report = trend_report(&period_totals(&entries));

        assert_eq!(report.trends, vec!["consistent logging".to_string()]);
        assert!(report.concerns.is_empty());
        assert_eq!(report.strengths, vec!["regular logging".to_string()]);
        assert_eq!(report.recommendations, vec!["maintain current habits".to_string()]);
        assert_eq!(report.score, 0.6);

        let empty = trend_report(&period_totals(&[]));
        assert_eq!(empty.concerns, vec!["low calories".to_string()]);
        assert!(empty.trends.is_empty());
    }

    #[test]
    fn cost_tips_total_twenty_five_a_week() {
        let tips = cost_tips();
        assert_eq!(tips.tips.len(), 2);
        assert_eq!(tips.total_potential_savings, "$25/week");
    }
}
