//! Drawable object systems
//!
//! `GameObject` is the single source of truth; `Transform`s and gizmo lines
//! are derived from it every frame.

use std::collections::HashMap;

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, PrimitiveTopology, TextureDimension, TextureFormat};
use rand::Rng;
use shared::{quad_geometry, Drawable, GameObject, ModelKind, UNIT_TILE};

use crate::settings::GameSettings;

/// Side length of the generated grass texture.
const GRASS_TEXTURE_SIZE: u32 = 32;

/// How a model projectile is rendered.
#[derive(Clone)]
pub enum ModelVisual {
    /// glTF scene from the settings file.
    Scene(Handle<Scene>),
    /// Built-in stand-in when no model is configured.
    Mesh {
        mesh: Handle<Mesh>,
        material: Handle<StandardMaterial>,
    },
}

/// Shared meshes/materials for drawable objects.
#[derive(Resource, Clone)]
pub struct ObjectAssets {
    pub tile_mesh: Handle<Mesh>,
    pub grass_material: Handle<StandardMaterial>,
    pub models: HashMap<ModelKind, ModelVisual>,
}

impl ObjectAssets {
    pub fn model(&self, kind: ModelKind) -> Option<&ModelVisual> {
        self.models.get(&kind)
    }
}

/// Create shared meshes/materials for object visuals.
pub fn setup_object_assets(
    mut commands: Commands,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let grass_texture = match &settings.assets.grass_texture {
        Some(path) => {
            info!("Loading grass texture from {}", path);
            asset_server.load(path.clone())
        }
        None => images.add(generate_grass_image(&mut rand::thread_rng())),
    };

    // Unlit + double-sided: tiles read the same from any angle.
    let grass_material = materials.add(StandardMaterial {
        base_color_texture: Some(grass_texture),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let models = ModelKind::ALL
        .into_iter()
        .map(|kind| {
            let visual = match settings.assets.model_path(kind) {
                Some(path) => {
                    info!("Loading {:?} model from {}", kind, path);
                    ModelVisual::Scene(
                        asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_string())),
                    )
                }
                None => builtin_model(kind, &mut meshes, &mut materials),
            };
            (kind, visual)
        })
        .collect();

    commands.insert_resource(ObjectAssets {
        tile_mesh: meshes.add(quad_mesh(UNIT_TILE)),
        grass_material,
        models,
    });
}

/// Stand-in mesh for a model kind with no configured glTF.
fn builtin_model(
    kind: ModelKind,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> ModelVisual {
    let (mesh, material) = match kind {
        ModelKind::Bullet => (
            // Capsules are built along +Y; lay it along -Z so it points where it flies.
            Mesh::from(Capsule3d::new(0.02, 0.1))
                .rotated_by(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
            StandardMaterial {
                base_color: Color::srgb(0.85, 0.7, 0.3),
                metallic: 0.6,
                perceptual_roughness: 0.4,
                ..default()
            },
        ),
        ModelKind::BeachBall => (
            Mesh::from(Sphere::new(0.05)),
            StandardMaterial {
                base_color: Color::srgb(0.95, 0.3, 0.25),
                perceptual_roughness: 0.8,
                ..default()
            },
        ),
    };
    ModelVisual::Mesh {
        mesh: meshes.add(mesh),
        material: materials.add(material),
    }
}

/// Build a render mesh for a textured quad.
pub fn quad_mesh(corners: [Vec3; 4]) -> Mesh {
    let geo = quad_geometry(corners);
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, geo.positions.to_vec())
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, geo.normals.to_vec())
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, geo.uvs.to_vec())
        .with_inserted_indices(Indices::U16(geo.indices.to_vec()))
}

/// Speckled green texture used when no grass image is configured.
pub fn generate_grass_image(rng: &mut impl Rng) -> Image {
    let mut data = Vec::with_capacity((GRASS_TEXTURE_SIZE * GRASS_TEXTURE_SIZE * 4) as usize);
    for _ in 0..GRASS_TEXTURE_SIZE * GRASS_TEXTURE_SIZE {
        let shade: f32 = rng.gen_range(0.75..1.0);
        data.extend_from_slice(&[
            (60.0 * shade) as u8,
            (150.0 * shade) as u8,
            (45.0 * shade) as u8,
            255,
        ]);
    }

    let mut image = Image::new(
        Extent3d {
            width: GRASS_TEXTURE_SIZE,
            height: GRASS_TEXTURE_SIZE,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.sampler = ImageSampler::nearest();
    image
}

/// Spawn an object with whatever visual its variant needs.
pub fn spawn_object(
    commands: &mut Commands,
    assets: &ObjectAssets,
    meshes: &mut Assets<Mesh>,
    object: GameObject,
) -> Entity {
    let transform = object.world_transform();
    match object.drawable.clone() {
        // Lines are drawn with gizmos straight from the GameObject.
        Drawable::Line { .. } => commands.spawn((object, transform)).id(),
        Drawable::TexturedQuad { corners } => {
            let mesh = if corners == UNIT_TILE {
                assets.tile_mesh.clone()
            } else {
                meshes.add(quad_mesh(corners))
            };
            commands
                .spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(assets.grass_material.clone()),
                    transform,
                    object,
                ))
                .id()
        }
        Drawable::Model { model, .. } => match assets.model(model) {
            Some(ModelVisual::Scene(scene)) => commands
                .spawn((SceneRoot(scene.clone()), transform, object))
                .id(),
            Some(ModelVisual::Mesh { mesh, material }) => commands
                .spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    transform,
                    object,
                ))
                .id(),
            None => {
                warn!("No visual loaded for {:?}; object stays invisible", model);
                commands.spawn((object, transform)).id()
            }
        },
    }
}

/// Integrate every object one frame.
pub fn update_objects(mut objects: Query<&mut GameObject>, time: Res<Time>) {
    let dt = time.delta_secs();
    for mut object in objects.iter_mut() {
        object.update(dt);
    }
}

/// Remove shots that lived too long or fell out of the world.
pub fn despawn_expired_objects(
    mut commands: Commands,
    objects: Query<(Entity, &GameObject)>,
    settings: Res<GameSettings>,
) {
    let kill_plane_y = settings.projectiles.kill_plane_y;
    for (entity, object) in objects.iter() {
        if object.is_expired(kill_plane_y) {
            commands.entity(entity).despawn();
        }
    }
}

/// Copy simulated state into render transforms.
pub fn sync_object_transforms(mut objects: Query<(&GameObject, &mut Transform), Changed<GameObject>>) {
    for (object, mut transform) in objects.iter_mut() {
        *transform = object.world_transform();
    }
}

/// Draw line objects.
pub fn draw_object_lines(mut gizmos: Gizmos, objects: Query<&GameObject>) {
    for object in objects.iter() {
        if let Some((start, end, color)) = object.line_endpoints() {
            gizmos.line(start, end, color);
        }
    }
}
