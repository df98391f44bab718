use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    consumption_log::{
        entities::ConsumptionLog,
        value_objects::{CreateConsumptionLogInput, GetConsumptionLogsFilter},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ConsumptionLogRepository: Send + Sync {
    fn create_log(
        &self,
        log: ConsumptionLog,
    ) -> impl Future<Output = Result<ConsumptionLog, CoreError>> + Send;

    /// Newest first.
    fn list_logs(
        &self,
        filter: GetConsumptionLogsFilter,
    ) -> impl Future<Output = Result<Vec<ConsumptionLog>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ConsumptionLogService: Send + Sync {
    fn log_consumption(
        &self,
        input: CreateConsumptionLogInput,
    ) -> impl Future<Output = Result<ConsumptionLog, CoreError>> + Send;

    fn get_logs(
        &self,
        filter: GetConsumptionLogsFilter,
    ) -> impl Future<Output = Result<Vec<ConsumptionLog>, CoreError>> + Send;
}
