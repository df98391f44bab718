use crate::application::http::{
    consumption_log::router::ConsumptionLogApiDoc, food::router::FoodApiDoc,
    health::router::HealthApiDoc, nutrition::router::NutritionApiDoc,
    user_preference::router::UserPreferenceApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spark Food API"
    ),
    nest(
        (path = "/foods", api = FoodApiDoc),
        (path = "/users", api = UserPreferenceApiDoc),
        (path = "/logs", api = ConsumptionLogApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
