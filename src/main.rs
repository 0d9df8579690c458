// Demo driver: seeds a disc of fluid and lets it slosh inside the default
// domain. Rendering stays in this file; the solver never sees pixel space.
use bevy::prelude::*;
use rand::Rng;

use visco2d::config::constants::DOMAIN;
use visco2d::core::step_simulation;
use visco2d::math::Vector;
use visco2d::{Particle, SimState, ViscoPlugin};

const PARTICLE_COUNT: usize = 600;
const SPAWN_CENTER: Vector = Vector::new(20.0, 20.0);
const SPAWN_RADIUS: f64 = 4.0;

// Pixels per simulation unit.
const VIEW_SCALE: f32 = 20.0;

#[derive(Component)]
struct ParticleVisual {
    index: usize,
}

fn sim_to_world(position: Vector) -> Vec3 {
    Vec3::new(
        ((position.x - DOMAIN.x * 0.5) as f32) * VIEW_SCALE,
        ((position.y - DOMAIN.y * 0.5) as f32) * VIEW_SCALE,
        0.0,
    )
}

fn spawn_particle_entity(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    index: usize,
    position: Vector,
    color: Color,
) {
    commands.spawn((
        ParticleVisual { index },
        Mesh2d(meshes.add(Circle::new(2.0))),
        MeshMaterial2d(materials.add(color)),
        Transform::from_translation(sim_to_world(position)),
    ));
}

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn init_particles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut state: ResMut<SimState>,
) {
    let mut rng = rand::rng();
    state.seed_disc(&mut rng, PARTICLE_COUNT, SPAWN_CENTER, SPAWN_RADIUS);

    for (index, particle) in state.particles().iter().enumerate() {
        spawn_particle_entity(
            &mut commands,
            &mut meshes,
            &mut materials,
            index,
            particle.position,
            Color::hsl(200.0, 0.8, 0.55),
        );
    }
}

/// Hold the left mouse button to pour extra particles in from above.
fn pour_particles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut state: ResMut<SimState>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }

    let mut rng = rand::rng();
    let position = Vector::new(
        DOMAIN.x * 0.5 + rng.random_range(-0.5..=0.5),
        DOMAIN.y - 1.0,
    );
    let velocity = Vector::new(rng.random_range(-2.0..=2.0), rng.random_range(-8.0..=-2.0));

    let index = state.add_particle(Particle::new(position, velocity));
    spawn_particle_entity(
        &mut commands,
        &mut meshes,
        &mut materials,
        index,
        position,
        Color::hsl(180.0, 0.9, 0.5),
    );
}

fn update_particle_transforms(
    state: Res<SimState>,
    mut query: Query<(&ParticleVisual, &mut Transform)>,
) {
    let particles = state.particles();
    for (visual, mut transform) in query.iter_mut() {
        if let Some(particle) = particles.get(visual.index) {
            transform.translation = sim_to_world(particle.position);
        }
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(ViscoPlugin)
        .add_systems(Startup, (init_camera, init_particles).chain())
        .add_systems(
            Update,
            (pour_particles, update_particle_transforms)
                .chain()
                .after(step_simulation),
        )
        .run();
}
