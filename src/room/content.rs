use std::sync::Arc;

use url::Url;
use uuid::Uuid;

use super::Room;
use super::types::{AppContent, DocumentPage, DocumentScene, ImageInfo, ImageSize, RoomError};

/// Inserts images, media and documents into a joined room.
///
/// Handed to the hosting application once the join succeeds. Holds no state
/// besides the room handle.
#[derive(Clone)]
pub struct RoomContent {
    room: Arc<dyn Room>,
}

impl RoomContent {
    pub fn new(room: Arc<dyn Room>) -> Self {
        Self { room }
    }

    pub fn room(&self) -> &Arc<dyn Room> {
        &self.room
    }

    /// Places an image at the camera center, then marks its upload complete.
    ///
    /// Returns the identifier of the inserted image.
    pub fn insert_image(&self, url: &str, size: ImageSize, locked: bool) -> Result<String, RoomError> {
        let src = validate_url(url)?;
        let id = Uuid::new_v4().to_string();
        let camera = self.room.room_state().camera_state;

        self.room.insert_image(ImageInfo {
            uuid: id.clone(),
            center_x: camera.center_x,
            center_y: camera.center_y,
            width: size.width,
            height: size.height,
            locked,
        });
        self.room.complete_image_upload(&id, src.as_str());

        log::debug!("Inserted image {id} from {src}");
        Ok(id)
    }

    pub fn insert_media(&self, src: &str, title: &str) -> Result<(), RoomError> {
        let src = validate_url(src)?;
        self.room.add_app(AppContent::MediaPlayer {
            title: title.to_string(),
            src: src.to_string(),
        });
        Ok(())
    }

    /// Adds a dynamic slide deck on a fresh scene path, which is returned.
    pub fn insert_slide(&self, task_id: &str, url: &str, title: &str) -> Result<String, RoomError> {
        let url = validate_url(url)?;
        let scene_path = fresh_scene_path();
        self.room.add_app(AppContent::Slide {
            title: title.to_string(),
            scene_path: scene_path.clone(),
            task_id: task_id.to_string(),
            url: url.to_string(),
        });
        Ok(scene_path)
    }

    /// Adds a static document viewer with one scene per page, named from "1".
    pub fn insert_static_document(&self, pages: Vec<DocumentPage>, title: &str) -> String {
        let scene_path = fresh_scene_path();
        let scenes = pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| DocumentScene {
                name: (index + 1).to_string(),
                ppt: page,
            })
            .collect();

        self.room.add_app(AppContent::DocsViewer {
            title: title.to_string(),
            scene_path: scene_path.clone(),
            scenes,
        });
        scene_path
    }
}

fn fresh_scene_path() -> String {
    format!("/{}", Uuid::new_v4())
}

fn validate_url(raw: &str) -> Result<Url, RoomError> {
    Url::parse(raw).map_err(|source| RoomError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
