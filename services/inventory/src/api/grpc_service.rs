//! gRPC service implementation

use std::sync::Arc;

use spacecraft_bootstrap::RequestTimer;
use spacecraft_errors::{AppError, AppResult};
use tonic::{Request, Response, Status};
use tracing::Instrument;

use crate::api::proto::v1::inventory_service_server::InventoryService;
use crate::api::proto::v1::{GetPartRequest, GetPartResponse, ListPartsRequest, ListPartsResponse};
use crate::api::proto_converters::{filter_from_proto, part_to_proto};
use crate::application::{GetPartQuery, ListPartsQuery, PartQueryHandler};
use crate::domain::PartId;

pub const SERVICE_NAME: &str = "inventory.v1.InventoryService";

pub struct InventoryServiceImpl {
    handler: Arc<PartQueryHandler>,
}

impl InventoryServiceImpl {
    pub fn new(handler: Arc<PartQueryHandler>) -> Self {
        Self { handler }
    }

    async fn handle_get_part(&self, req: GetPartRequest) -> AppResult<GetPartResponse> {
        if req.uuid.trim().is_empty() {
            return Err(AppError::validation("uuid must not be empty"));
        }

        let part = self
            .handler
            .get_part(GetPartQuery {
                id: PartId::from(req.uuid),
            })
            .await?;

        Ok(GetPartResponse {
            part: Some(part_to_proto(&part)),
        })
    }

    async fn handle_list_parts(&self, req: ListPartsRequest) -> ListPartsResponse {
        let Some(filter) = filter_from_proto(req.filter) else {
            tracing::debug!("Filter only contains unknown categories, nothing can match");
            return ListPartsResponse { parts: vec![] };
        };

        let parts = self.handler.list_parts(ListPartsQuery { filter }).await;

        ListPartsResponse {
            parts: parts.iter().map(|p| part_to_proto(p)).collect(),
        }
    }
}

fn status_label<T>(result: &AppResult<T>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    }
}

#[tonic::async_trait]
impl InventoryService for InventoryServiceImpl {
    async fn get_part(
        &self,
        request: Request<GetPartRequest>,
    ) -> Result<Response<GetPartResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "GetPart");
        let req = request.into_inner();

        let span = tracing::info_span!("grpc_request", span_name = "GetPart", part_id = %req.uuid);
        let result = self.handle_get_part(req).instrument(span).await;

        timer.finish(status_label(&result));
        result.map(Response::new).map_err(Status::from)
    }

    async fn list_parts(
        &self,
        request: Request<ListPartsRequest>,
    ) -> Result<Response<ListPartsResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "ListParts");
        let req = request.into_inner();

        let span = tracing::info_span!("grpc_request", span_name = "ListParts");
        let response = self.handle_list_parts(req).instrument(span).await;

        timer.finish("ok");
        Ok(Response::new(response))
    }
}
