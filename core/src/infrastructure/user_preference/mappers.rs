use crate::{
    domain::{
        food::entities::PriceTier,
        user_preference::entities::{DietStyle, UserPreference},
    },
    entity::user_preferences::Model as UserPreferenceModel,
    infrastructure::food::mappers::json_to_strings,
};

impl From<UserPreferenceModel> for UserPreference {
    fn from(model: UserPreferenceModel) -> Self {
        UserPreference {
            diet_style: DietStyle::from(model.diet_style.as_str()),
            dislikes: json_to_strings(&model.dislikes),
            price_ceiling: PriceTier::from(model.price_ceiling.as_str()),
            home_area: model.home_area,
            recent_picks: json_to_strings(&model.recent_picks),
        }
    }
}
