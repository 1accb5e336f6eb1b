use cinedb_catalog::types::*;
use cinedb_db::*;
use rusqlite::Connection;

fn roles(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn movie(conn: &Connection, name: &str, year: i32, genre: Genre) {
    add_movie(conn, &Movie::new(name, year, genre)).unwrap();
}

fn actor(conn: &Connection, id: i64, age: i32) {
    add_actor(conn, &Actor::new(id, format!("Actor {id}"), age, 175)).unwrap();
}

fn critic(conn: &Connection, id: i64) {
    add_critic(conn, &Critic::new(id, format!("Critic {id}"))).unwrap();
}

fn studio(conn: &Connection, id: i64) {
    add_studio(conn, &Studio::new(id, format!("Studio {id}"))).unwrap();
}

fn cast(conn: &Connection, name: &str, year: i32, actor_id: i64, salary: i64, parts: &[&str]) {
    actor_played_in_movie(conn, name, year, actor_id, salary, &roles(parts)).unwrap();
}

// ── average_rating ──────────────────────────────────────────────────────────

#[test]
fn end_to_end_single_rating() {
    let conn = open_memory().unwrap();
    assert_eq!(
        ReturnValue::of(&add_critic(&conn, &Critic::new(1, "John"))),
        ReturnValue::Ok
    );
    movie(&conn, "MI", 1996, Genre::Action);
    assert_eq!(
        ReturnValue::of(&critic_rated_movie(&conn, "MI", 1996, 1, 3)),
        ReturnValue::Ok
    );
    assert_eq!(average_rating(&conn, "MI", 1996).unwrap(), 3.0);
}

#[test]
fn average_rating_of_several_ratings() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    for (id, rating) in [(1, 3), (2, 4), (3, 4), (4, 5)] {
        critic(&conn, id);
        critic_rated_movie(&conn, "Heat", 1995, id, rating).unwrap();
    }
    assert_eq!(average_rating(&conn, "Heat", 1995).unwrap(), 4.0);
}

#[test]
fn average_rating_defaults_to_zero() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    assert_eq!(average_rating(&conn, "Heat", 1995).unwrap(), 0.0);
    assert_eq!(average_rating(&conn, "Missing", 2000).unwrap(), 0.0);
}

// ── average_actor_rating ────────────────────────────────────────────────────

#[test]
fn average_actor_rating_counts_unrated_movies_as_zero() {
    let conn = open_memory().unwrap();
    actor(&conn, 1, 40);
    critic(&conn, 1);
    critic(&conn, 2);
    movie(&conn, "Rated", 1990, Genre::Drama);
    movie(&conn, "Unrated", 1991, Genre::Drama);
    critic_rated_movie(&conn, "Rated", 1990, 1, 3).unwrap();
    critic_rated_movie(&conn, "Rated", 1990, 2, 5).unwrap();
    cast(&conn, "Rated", 1990, 1, 10, &[]);
    cast(&conn, "Unrated", 1991, 1, 10, &[]);

    assert_eq!(average_actor_rating(&conn, 1).unwrap(), 2.0);
}

#[test]
fn average_actor_rating_without_casts_is_zero() {
    let conn = open_memory().unwrap();
    actor(&conn, 1, 40);
    assert_eq!(average_actor_rating(&conn, 1).unwrap(), 0.0);
    assert_eq!(average_actor_rating(&conn, 99).unwrap(), 0.0);
}

// ── best_performance ────────────────────────────────────────────────────────

fn rate_all(conn: &Connection, name: &str, year: i32, rating: i32) {
    critic_rated_movie(conn, name, year, 1, rating).unwrap();
}

#[test]
fn best_performance_prefers_earlier_year_on_tie() {
    let conn = open_memory().unwrap();
    actor(&conn, 1, 40);
    critic(&conn, 1);
    movie(&conn, "Z", 1996, Genre::Action);
    movie(&conn, "A", 1995, Genre::Comedy);
    rate_all(&conn, "Z", 1996, 4);
    rate_all(&conn, "A", 1995, 4);
    cast(&conn, "Z", 1996, 1, 10, &[]);
    cast(&conn, "A", 1995, 1, 10, &[]);

    assert_eq!(
        best_performance(&conn, 1).unwrap(),
        Some(Movie::new("A", 1995, Genre::Comedy))
    );
}

#[test]
fn best_performance_prefers_larger_name_on_same_year() {
    let conn = open_memory().unwrap();
    actor(&conn, 1, 40);
    critic(&conn, 1);
    movie(&conn, "Alpha", 1995, Genre::Action);
    movie(&conn, "Beta", 1995, Genre::Action);
    rate_all(&conn, "Alpha", 1995, 4);
    rate_all(&conn, "Beta", 1995, 4);
    cast(&conn, "Alpha", 1995, 1, 10, &[]);
    cast(&conn, "Beta", 1995, 1, 10, &[]);

    let best = best_performance(&conn, 1).unwrap().unwrap();
    assert_eq!(best.name, "Beta");
}

#[test]
fn best_performance_ranks_unrated_below_rated() {
    let conn = open_memory().unwrap();
    actor(&conn, 1, 40);
    critic(&conn, 1);
    movie(&conn, "Old Unrated", 1986, Genre::Horror);
    movie(&conn, "Panned", 2001, Genre::Horror);
    rate_all(&conn, "Panned", 2001, 1);
    cast(&conn, "Old Unrated", 1986, 1, 10, &[]);
    cast(&conn, "Panned", 2001, 1, 10, &[]);

    let best = best_performance(&conn, 1).unwrap().unwrap();
    assert_eq!(best.name, "Panned");
}

#[test]
fn best_performance_higher_average_wins() {
    let conn = open_memory().unwrap();
    actor(&conn, 1, 40);
    critic(&conn, 1);
    movie(&conn, "Good", 2010, Genre::Drama);
    movie(&conn, "Great", 2012, Genre::Drama);
    rate_all(&conn, "Good", 2010, 4);
    rate_all(&conn, "Great", 2012, 5);
    cast(&conn, "Good", 2010, 1, 10, &[]);
    cast(&conn, "Great", 2012, 1, 10, &[]);

    let best = best_performance(&conn, 1).unwrap().unwrap();
    assert_eq!(best.name, "Great");
}

#[test]
fn best_performance_without_casts_is_none() {
    let conn = open_memory().unwrap();
    actor(&conn, 1, 40);
    assert_eq!(best_performance(&conn, 1).unwrap(), None);
}

// ── stage_crew_budget ───────────────────────────────────────────────────────

#[test]
fn stage_crew_budget_subtracts_salaries() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    actor(&conn, 1, 50);
    actor(&conn, 2, 55);
    studio(&conn, 1);
    cast(&conn, "Heat", 1995, 1, 30, &["Neil"]);
    cast(&conn, "Heat", 1995, 2, 20, &["Vincent"]);
    studio_produced_movie(&conn, 1, "Heat", 1995, 100, 187).unwrap();

    assert_eq!(stage_crew_budget(&conn, "Heat", 1995).unwrap(), Some(50));
}

#[test]
fn stage_crew_budget_of_unproduced_movie() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    movie(&conn, "Empty", 1999, Genre::Drama);
    actor(&conn, 1, 50);
    cast(&conn, "Heat", 1995, 1, 30, &[]);

    assert_eq!(stage_crew_budget(&conn, "Heat", 1995).unwrap(), Some(-30));
    assert_eq!(stage_crew_budget(&conn, "Empty", 1999).unwrap(), Some(0));
    assert_eq!(stage_crew_budget(&conn, "Missing", 1999).unwrap(), None);
}

// ── overly_invested_in_movie ────────────────────────────────────────────────

#[test]
fn overly_invested_two_of_three() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    actor(&conn, 1, 50);
    actor(&conn, 2, 55);
    cast(&conn, "Heat", 1995, 1, 10, &["Neil", "Narrator"]);
    cast(&conn, "Heat", 1995, 2, 10, &["Vincent"]);

    assert!(overly_invested_in_movie(&conn, "Heat", 1995, 1).unwrap());
    assert!(!overly_invested_in_movie(&conn, "Heat", 1995, 2).unwrap());
}

#[test]
fn overly_invested_one_of_four() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    actor(&conn, 1, 50);
    actor(&conn, 2, 55);
    cast(&conn, "Heat", 1995, 1, 10, &["Neil"]);
    cast(&conn, "Heat", 1995, 2, 10, &["Vincent", "Cop", "Narrator"]);

    assert!(!overly_invested_in_movie(&conn, "Heat", 1995, 1).unwrap());
    assert!(overly_invested_in_movie(&conn, "Heat", 1995, 2).unwrap());
}

#[test]
fn overly_invested_at_exactly_half() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    actor(&conn, 1, 50);
    actor(&conn, 2, 55);
    cast(&conn, "Heat", 1995, 1, 10, &["Neil", "Narrator"]);
    cast(&conn, "Heat", 1995, 2, 10, &["Vincent", "Cop"]);

    assert!(overly_invested_in_movie(&conn, "Heat", 1995, 1).unwrap());
    assert!(overly_invested_in_movie(&conn, "Heat", 1995, 2).unwrap());
}

#[test]
fn overly_invested_false_without_roles() {
    let conn = open_memory().unwrap();
    movie(&conn, "Heat", 1995, Genre::Action);
    actor(&conn, 1, 50);
    cast(&conn, "Heat", 1995, 1, 10, &[]);

    assert!(!overly_invested_in_movie(&conn, "Heat", 1995, 1).unwrap());
    assert!(!overly_invested_in_movie(&conn, "Heat", 1995, 7).unwrap());
    assert!(!overly_invested_in_movie(&conn, "Missing", 1995, 1).unwrap());
}

// ── Reports ─────────────────────────────────────────────────────────────────

/// Two studios, three movies (two sharing a name), one unproduced movie.
fn report_fixture() -> Connection {
    let conn = open_memory().unwrap();
    studio(&conn, 1);
    studio(&conn, 2);
    studio(&conn, 3);
    movie(&conn, "Mission Impossible", 1996, Genre::Action);
    movie(&conn, "Mission Impossible", 2023, Genre::Action);
    movie(&conn, "Heat", 1995, Genre::Drama);
    movie(&conn, "Indie", 2001, Genre::Comedy);
    studio_produced_movie(&conn, 1, "Mission Impossible", 1996, 80, 100).unwrap();
    studio_produced_movie(&conn, 1, "Mission Impossible", 2023, 290, 50).unwrap();
    studio_produced_movie(&conn, 2, "Heat", 1995, 60, 70).unwrap();
    conn
}

#[test]
fn franchise_revenue_pools_years_by_name() {
    let conn = report_fixture();
    let rows = franchise_revenue(&conn).unwrap();
    assert_eq!(
        rows,
        vec![
            FranchiseRevenue {
                movie_name: "Mission Impossible".to_string(),
                revenue: 150,
            },
            FranchiseRevenue {
                movie_name: "Indie".to_string(),
                revenue: 0,
            },
            FranchiseRevenue {
                movie_name: "Heat".to_string(),
                revenue: 70,
            },
        ]
    );
}

#[test]
fn studio_revenue_by_year_ordering() {
    let conn = report_fixture();
    movie(&conn, "Ronin", 1996, Genre::Action);
    studio_produced_movie(&conn, 1, "Ronin", 1996, 10, 20).unwrap();

    let rows: Vec<(i64, i32, i64)> = studio_revenue_by_year(&conn)
        .unwrap()
        .into_iter()
        .map(|r| (r.studio_id, r.year, r.revenue))
        .collect();
    assert_eq!(rows, vec![(2, 1995, 70), (1, 2023, 50), (1, 1996, 120)]);
}

#[test]
fn fan_critics_rated_every_production() {
    let conn = report_fixture();
    for id in 1..=3 {
        critic(&conn, id);
    }
    // Critic 1 rated everything produced, critic 2 missed a studio 1 movie,
    // critic 3 only covers studio 2.
    let everything = [
        ("Mission Impossible", 1996),
        ("Mission Impossible", 2023),
        ("Heat", 1995),
    ];
    for (name, year) in everything {
        critic_rated_movie(&conn, name, year, 1, 4).unwrap();
    }
    critic_rated_movie(&conn, "Mission Impossible", 1996, 2, 2).unwrap();
    critic_rated_movie(&conn, "Heat", 1995, 3, 5).unwrap();
    critic_rated_movie(&conn, "Indie", 2001, 3, 5).unwrap();

    let pairs: Vec<(i64, i64)> = get_fan_critics(&conn)
        .unwrap()
        .into_iter()
        .map(|f| (f.critic_id, f.studio_id))
        .collect();
    assert_eq!(pairs, vec![(3, 2), (1, 2), (1, 1)]);
}

#[test]
fn average_age_by_genre_counts_each_actor_once() {
    let conn = report_fixture();
    actor(&conn, 1, 30);
    actor(&conn, 2, 50);
    actor(&conn, 3, 20);
    cast(&conn, "Mission Impossible", 1996, 1, 10, &[]);
    cast(&conn, "Mission Impossible", 2023, 1, 10, &[]);
    cast(&conn, "Mission Impossible", 2023, 2, 10, &[]);
    cast(&conn, "Heat", 1995, 2, 10, &[]);
    cast(&conn, "Heat", 1995, 3, 10, &[]);

    let rows = average_age_by_genre(&conn).unwrap();
    assert_eq!(
        rows,
        vec![
            GenreAge {
                genre: Genre::Action,
                average_age: 40.0,
            },
            GenreAge {
                genre: Genre::Drama,
                average_age: 35.0,
            },
        ]
    );
}

#[test]
fn exclusive_actors_single_studio_only() {
    let conn = report_fixture();
    for id in 1..=5 {
        actor(&conn, id, 30);
    }
    // 1: both studio 1 movies. 2: studios 1 and 2. 3: studio 2 only.
    // 4: only an unproduced movie. 5: studio 1 plus an unproduced movie.
    cast(&conn, "Mission Impossible", 1996, 1, 10, &[]);
    cast(&conn, "Mission Impossible", 2023, 1, 10, &[]);
    cast(&conn, "Mission Impossible", 1996, 2, 10, &[]);
    cast(&conn, "Heat", 1995, 2, 10, &[]);
    cast(&conn, "Heat", 1995, 3, 10, &[]);
    cast(&conn, "Indie", 2001, 4, 10, &[]);
    cast(&conn, "Mission Impossible", 2023, 5, 10, &[]);
    cast(&conn, "Indie", 2001, 5, 10, &[]);

    let pairs: Vec<(i64, i64)> = get_exclusive_actors(&conn)
        .unwrap()
        .into_iter()
        .map(|e| (e.actor_id, e.studio_id))
        .collect();
    assert_eq!(pairs, vec![(3, 2), (1, 1)]);
}

#[test]
fn reports_are_empty_on_empty_database() {
    let conn = open_memory().unwrap();
    assert!(franchise_revenue(&conn).unwrap().is_empty());
    assert!(studio_revenue_by_year(&conn).unwrap().is_empty());
    assert!(get_fan_critics(&conn).unwrap().is_empty());
    assert!(average_age_by_genre(&conn).unwrap().is_empty());
    assert!(get_exclusive_actors(&conn).unwrap().is_empty());
}
