//! ECS systems for collision bodies and actors.

use glam::{Mat4, Vec3};
use tracing::debug;

use crate::collision::{Collidable, CollisionBody, CollisionResult, Transformable};
use crate::ecs::components::{Actor, ActorContacts, Position};
use crate::services::StepClock;

/// Re-transform every collision body from its placement.
///
/// Run after moving bodies (e.g. platforms) and before
/// [`actor_collision_system`], which queries bodies in place.
pub fn body_transform_system(world: &mut hecs::World) {
    for (_, body) in world.query_mut::<&mut CollisionBody>() {
        if body.is_initialized() {
            body.transform(&Mat4::IDENTITY);
        }
    }
}

/// Push every actor out of every collision body.
///
/// Bodies are tested one after another; each correction is applied before
/// the next body is queried. Returns the number of actor/body pairs that
/// collided.
pub fn actor_collision_system(world: &mut hecs::World, clock: &dyn StepClock) -> usize {
    // Collect actors first to avoid borrow conflicts with the body query.
    let actors: Vec<(hecs::Entity, Vec3, Actor)> = world
        .query_mut::<(&Position, &Actor)>()
        .into_iter()
        .map(|(entity, (position, actor))| (entity, position.0, *actor))
        .collect();

    let mut collisions = 0;

    for (entity, start, actor) in actors {
        let mut position = start;
        let mut last = CollisionResult::new();

        for (_, body) in world.query_mut::<&mut CollisionBody>() {
            let result = body.react_to_collision_in_place(&actor.query_at(position), clock);
            if result.any_collision() {
                position += result.correction();
                last = result;
                collisions += 1;
            }
        }

        if position != start {
            debug!("Actor {:?} pushed from {:?} to {:?}", entity, start, position);
            if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                pos.0 = position;
            }
        }
        if let Ok(mut contacts) = world.get::<&mut ActorContacts>(entity) {
            contacts.0 = last;
        }
    }

    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CollisionCategory;
    use crate::mesh::{CollisionMesh, MeshLibrary};
    use crate::transform::Transform;

    fn floor_mesh() -> CollisionMesh {
        let v = [
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(-5.0, 0.0, 5.0),
        ];
        CollisionMesh::from_indexed(&v, &[0, 2, 1, 0, 3, 2]).unwrap()
    }

    fn spawn_floor(world: &mut hecs::World, library: &MeshLibrary, height: f32) {
        let mut body = CollisionBody::default()
            .with_placement(Transform::from_position(Vec3::new(0.0, height, 0.0)));
        body.initialize(library, "floor").unwrap();
        world.spawn((body,));
    }

    #[test]
    fn test_actor_pushed_out_of_floor() {
        let mut library = MeshLibrary::new();
        library.insert("floor", floor_mesh());

        let mut world = hecs::World::new();
        spawn_floor(&mut world, &library, 0.0);

        let actor = world.spawn((
            Position(Vec3::new(0.5, 0.05, 0.5)),
            Actor::new(0.5).with_padding(0.1, 0.1),
            ActorContacts::default(),
        ));

        let collisions = actor_collision_system(&mut world, &(1.0f32 / 60.0));
        assert_eq!(collisions, 1);

        let position = world.get::<&Position>(actor).unwrap().0;
        assert!((position.y - 0.1).abs() < 1e-5);

        let contacts = world.get::<&ActorContacts>(actor).unwrap();
        assert!(contacts.0.has_collision(CollisionCategory::Floor));
    }

    #[test]
    fn test_actor_clear_of_geometry() {
        let mut library = MeshLibrary::new();
        library.insert("floor", floor_mesh());

        let mut world = hecs::World::new();
        spawn_floor(&mut world, &library, 0.0);

        let actor = world.spawn((Position(Vec3::new(0.0, 3.0, 0.0)), Actor::new(0.5)));
        assert_eq!(actor_collision_system(&mut world, &0.0f32), 0);
        assert_eq!(
            world.get::<&Position>(actor).unwrap().0,
            Vec3::new(0.0, 3.0, 0.0)
        );
    }

    #[test]
    fn test_moved_body_needs_transform_system() {
        let mut library = MeshLibrary::new();
        library.insert("floor", floor_mesh());

        let mut world = hecs::World::new();
        spawn_floor(&mut world, &library, 0.0);
        let actor = world.spawn((
            Position(Vec3::new(0.0, 1.05, 0.0)),
            Actor::new(0.5).with_padding(0.1, 0.1),
        ));

        // Raise the floor to y = 1.
        for (_, body) in world.query_mut::<&mut CollisionBody>() {
            body.placement_mut().position.y = 1.0;
        }
        assert_eq!(actor_collision_system(&mut world, &0.0f32), 0);

        body_transform_system(&mut world);
        assert_eq!(actor_collision_system(&mut world, &0.0f32), 1);
        let position = world.get::<&Position>(actor).unwrap().0;
        assert!((position.y - 1.1).abs() < 1e-5);
    }
}
