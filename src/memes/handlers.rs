use crate::app_context::AppContext;
use crate::http::responses::JsonResponse;
use crate::memegen::client::InstanceRequest;
use crate::memes::errors::CommandError;
use crate::memes::requests::{parse_image_id, CaptionPair, ImagePath, SlashCommandForm};
use crate::memes::responses::ResponseEnvelope;
use axum::extract::rejection::FormRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::Form;

/// Handles `POST /` and `POST /<image-id>[/...]`.
#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    image_path: Option<Path<ImagePath>>,
    form: Result<Form<SlashCommandForm>, FormRejection>,
) -> Result<JsonResponse<ResponseEnvelope>, CommandError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected slash command form.");
        CommandError::BadRequest
    })?;
    // Static routes such as `/health/check` capture no parameter, so fall back to the raw path.
    let image_id = match &image_path {
        Some(path) => parse_image_id(&path.image_id),
        None => parse_image_id(uri.path()),
    };
    let text = form
        .text
        .as_deref()
        .filter(|text| !text.is_empty())
        .ok_or(CommandError::BadRequest)?;
    let captions = CaptionPair::split(text);
    tracing::debug!(image_id, "Requesting meme instance.");

    let request = InstanceRequest {
        image_id,
        text0: captions.text0,
        text1: captions.text1,
    };
    let cancellation = app_context.shutdown.child_token();
    let image_url = app_context
        .memegen
        .create_instance(&request, &cancellation)
        .await?;

    Ok(JsonResponse::ok(ResponseEnvelope::in_channel(image_url)))
}

pub async fn not_found() -> CommandError {
    CommandError::NotFound
}

pub async fn method_not_allowed() -> CommandError {
    CommandError::MethodNotAllowed
}
