use crate::config::GameConfig;
use crate::types::*;

/// Spawn a projectile at the firing player's leading edge, vertically centred.
pub fn spawn_projectile(player: &PlayerState, config: &GameConfig) -> Projectile {
    let x = match player.slot {
        PlayerSlot::One => player.x + player.width,
        PlayerSlot::Two => player.x - config.projectile_width,
    };
    Projectile {
        owner: player.slot,
        x,
        y: player.y + player.height / 2 - config.projectile_height / 2,
        width: config.projectile_width,
        height: config.projectile_height,
        vx: player.slot.facing() * config.projectile_speed,
        vy: 0,
    }
}

pub fn move_projectile(proj: &Projectile) -> Projectile {
    Projectile {
        x: proj.x + proj.vx,
        y: proj.y + proj.vy,
        ..*proj
    }
}

/// Off-canvas test on the projectile's origin corner.
pub fn is_out_of_bounds(proj: &Projectile, config: &GameConfig) -> bool {
    proj.x < 0 || proj.x > config.canvas_width || proj.y < 0 || proj.y > config.canvas_height
}

/// Apply one hit's damage. Returns true if the shield absorbed it.
pub fn apply_hit(target: &mut PlayerState, config: &GameConfig) -> bool {
    if target.shield_active && target.shield > 0 {
        target.shield = (target.shield - config.hit_damage).max(0);
        true
    } else {
        target.health = (target.health - config.hit_damage).max(0);
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub owner: PlayerSlot,
    pub target: PlayerSlot,
    pub absorbed: bool,
}

/// Advance every projectile one frame and resolve boundary exits and hits.
///
/// Scans newest first. Each projectile is removed at most once: either it left
/// the canvas (no damage) or it struck the opponent (one damage application).
/// Damage lands before the next projectile is checked.
pub fn update_projectiles(
    projectiles: &mut Vec<Projectile>,
    players: &mut [PlayerState; 2],
    config: &GameConfig,
) -> Vec<Hit> {
    let mut hits = Vec::new();

    for i in (0..projectiles.len()).rev() {
        let proj = move_projectile(&projectiles[i]);
        projectiles[i] = proj;

        if is_out_of_bounds(&proj, config) {
            projectiles.remove(i);
            continue;
        }

        let target = &mut players[proj.owner.opponent().index()];
        if proj.rect().overlaps(&target.rect()) {
            let absorbed = apply_hit(target, config);
            hits.push(Hit {
                owner: proj.owner,
                target: target.slot,
                absorbed,
            });
            projectiles.remove(i);
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{default_config, spawn_player};

    fn players_at(p1: (i32, i32), p2: (i32, i32)) -> [PlayerState; 2] {
        let config = default_config();
        let mut a = spawn_player(PlayerSlot::One, &config);
        let mut b = spawn_player(PlayerSlot::Two, &config);
        (a.x, a.y) = p1;
        (b.x, b.y) = p2;
        [a, b]
    }

    fn bullet(owner: PlayerSlot, x: i32, y: i32) -> Projectile {
        Projectile {
            owner,
            x,
            y,
            width: 10,
            height: 4,
            vx: owner.facing() * 10,
            vy: 0,
        }
    }

    #[test]
    fn spawn_at_leading_edge() {
        let config = default_config();
        let [p1, p2] = players_at((100, 300), (600, 300));

        let a = spawn_projectile(&p1, &config);
        assert_eq!((a.x, a.y), (140, 318));
        assert_eq!((a.vx, a.vy), (10, 0));
        assert_eq!((a.width, a.height), (10, 4));

        let b = spawn_projectile(&p2, &config);
        assert_eq!((b.x, b.y), (590, 318));
        assert_eq!(b.vx, -10);
        assert_eq!(b.owner, PlayerSlot::Two);
    }

    #[test]
    fn shield_absorbs_when_active() {
        let config = default_config();
        let [mut p, _] = players_at((0, 0), (0, 0));
        p.shield_active = true;
        p.shield = 30;
        assert!(apply_hit(&mut p, &config));
        assert_eq!(p.shield, 20);
        assert_eq!(p.health, 100);
    }

    #[test]
    fn health_takes_hit_without_shield() {
        let config = default_config();
        let [mut p, _] = players_at((0, 0), (0, 0));
        assert!(!apply_hit(&mut p, &config));
        assert_eq!(p.health, 90);
        assert_eq!(p.shield, 100);

        // Active but depleted shield does not absorb.
        p.shield_active = true;
        p.shield = 0;
        assert!(!apply_hit(&mut p, &config));
        assert_eq!(p.health, 80);
    }

    #[test]
    fn damage_floors_at_zero() {
        let config = default_config();
        let [mut p, _] = players_at((0, 0), (0, 0));
        p.health = 5;
        apply_hit(&mut p, &config);
        assert_eq!(p.health, 0);
        apply_hit(&mut p, &config);
        assert_eq!(p.health, 0);

        p.shield_active = true;
        p.shield = 4;
        apply_hit(&mut p, &config);
        assert_eq!(p.shield, 0);
    }

    #[test]
    fn exits_canvas_without_damage() {
        let config = default_config();
        let mut players = players_at((100, 300), (600, 300));
        let mut projs = vec![
            bullet(PlayerSlot::One, 795, 100),
            bullet(PlayerSlot::Two, 5, 100),
        ];
        let hits = update_projectiles(&mut projs, &mut players, &config);
        assert!(hits.is_empty());
        assert!(projs.is_empty());
        assert_eq!(players[0].health, 100);
        assert_eq!(players[1].health, 100);
    }

    #[test]
    fn right_edge_is_inclusive() {
        let config = default_config();
        let mut players = players_at((100, 300), (600, 300));
        let mut projs = vec![bullet(PlayerSlot::One, 790, 100)];
        update_projectiles(&mut projs, &mut players, &config);
        assert_eq!(projs.len(), 1);
        assert_eq!(projs[0].x, 800);
    }

    #[test]
    fn hit_removes_projectile_and_damages_opponent_only() {
        let config = default_config();
        let mut players = players_at((100, 300), (600, 300));
        // One frame from overlapping player 2's left edge.
        let mut projs = vec![bullet(PlayerSlot::One, 585, 318)];
        let hits = update_projectiles(&mut projs, &mut players, &config);
        assert_eq!(
            hits,
            vec![Hit {
                owner: PlayerSlot::One,
                target: PlayerSlot::Two,
                absorbed: false
            }]
        );
        assert!(projs.is_empty());
        assert_eq!(players[1].health, 90);
        assert_eq!(players[0].health, 100);
    }

    #[test]
    fn own_projectile_passes_through_owner() {
        let config = default_config();
        let mut players = players_at((100, 300), (600, 300));
        let mut projs = vec![bullet(PlayerSlot::One, 100, 318)];
        let hits = update_projectiles(&mut projs, &mut players, &config);
        assert!(hits.is_empty());
        assert_eq!(projs.len(), 1);
        assert_eq!(players[0].health, 100);
    }

    #[test]
    fn grazing_edge_is_not_a_hit() {
        let config = default_config();
        let mut players = players_at((100, 300), (600, 300));
        // Bottom edge of the bullet touches the top edge of player 2.
        let mut projs = vec![bullet(PlayerSlot::One, 600, 296)];
        let hits = update_projectiles(&mut projs, &mut players, &config);
        assert!(hits.is_empty());
        assert_eq!(projs.len(), 1);
    }

    #[test]
    fn stacked_hits_see_updated_shield() {
        let config = default_config();
        let mut players = players_at((100, 300), (600, 300));
        players[1].shield_active = true;
        players[1].shield = 10;
        let mut projs = vec![
            bullet(PlayerSlot::One, 590, 310),
            bullet(PlayerSlot::One, 595, 320),
        ];
        let hits = update_projectiles(&mut projs, &mut players, &config);
        assert_eq!(hits.len(), 2);
        // Newest first: the second bullet drains the shield, the first hits health.
        assert!(hits[0].absorbed);
        assert!(!hits[1].absorbed);
        assert_eq!(players[1].shield, 0);
        assert_eq!(players[1].health, 90);
        assert!(projs.is_empty());
    }
}
