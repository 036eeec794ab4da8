//! Fixture API client wrapping `gloo-net` for calls to `API/homes/{home}/*`.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use homepanel_app::ports::FixtureApi;
use homepanel_app::ports::fixture_api::FixturePath;
use homepanel_domain::error::{ApiError, PanelError};
use homepanel_domain::id::RoomId;
use homepanel_domain::room::{HouseDocument, Room, RoomMap};
use homepanel_domain::save::{SaveRequest, SaveResponse};

/// Relative base the page resolves fixture paths against.
pub const DEFAULT_BASE: &str = "API";

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`FixtureApi`] over HTTP for one home.
#[derive(Debug, Clone)]
pub struct HttpFixtureApi {
    base: String,
    home: String,
}

impl HttpFixtureApi {
    pub fn new(home: impl Into<String>) -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            home: home.into(),
        }
    }

    fn url(&self, path: FixturePath<'_>) -> String {
        format!("{}/{}", self.base, path.for_home(&self.home))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, PanelError> {
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|err| transport(&url, &err))?;
        let resp = check_response(&url, resp).await?;
        resp.json::<T>().await.map_err(|err| {
            ApiError::Decode {
                url: url.clone(),
                message: err.to_string(),
            }
            .into()
        })
    }
}

impl FixtureApi for HttpFixtureApi {
    async fn fetch_house(&self) -> Result<HouseDocument, PanelError> {
        self.get_json(self.url(FixturePath::House)).await
    }

    async fn fetch_rooms(&self) -> Result<RoomMap, PanelError> {
        self.get_json(self.url(FixturePath::Rooms)).await
    }

    async fn fetch_room(&self, room: &RoomId) -> Result<Room, PanelError> {
        self.get_json(self.url(FixturePath::Room(room))).await
    }

    async fn save(&self, request: &SaveRequest) -> Result<SaveResponse, PanelError> {
        let url = save_url(&self.url(FixturePath::from(request)), request);
        tracing::debug!(%url, "sending save");
        self.get_json(url).await
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(url: &str, resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    if let Ok(body) = resp.json::<ErrorBody>().await {
        tracing::warn!(%url, status, error = %body.error, "fixture api refused request");
    }
    Err(ApiError::Status {
        url: url.to_string(),
        status,
    })
}

fn transport(url: &str, err: &gloo_net::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}

fn save_url(path: &str, request: &SaveRequest) -> String {
    let query: Vec<String> = request
        .params()
        .into_iter()
        .map(|(key, value)| format!("{key}={}", encode_query_value(&value)))
        .collect();
    format!("{path}?{}", query.join("&"))
}

/// Percent-encode a query parameter value (handles `+`, `&`, `=`, spaces, etc.).
fn encode_query_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('#', "%23")
        .replace(' ', "%20")
}
