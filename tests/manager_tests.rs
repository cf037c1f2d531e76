use chrono::{NaiveDate, NaiveTime};
use fitness_tracker::model::{Equipment, FoodFamily, MuscleGroup, Nutrition, Recovery, Workout, WorkoutFilter};
use fitness_tracker::{AppError, MemoryStore, RecordManager};
use std::sync::Arc;

fn manager() -> RecordManager {
    RecordManager::new(Arc::new(MemoryStore::new()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn workout(on: NaiveDate, calories: f64, rpe: i32) -> Workout {
    Workout::new(on, NaiveTime::from_hms_opt(7, 30, 0).unwrap(), 45, "Run", calories, rpe, None)
}

#[tokio::test]
async fn save_assigns_identity_then_updates_in_place() {
    let m = manager();
    let mut w = workout(date(2026, 2, 28), 410.0, 9);
    m.save(&mut w).await.unwrap();
    assert!(w.workout_id > 0);
    assert_eq!(m.get::<Workout>(w.workout_id).await.unwrap(), Some(w.clone()));

    let id = w.workout_id;
    w.calories_burned = 450.0;
    w.type_description = "Tempo run".into();
    m.save(&mut w).await.unwrap();
    assert_eq!(w.workout_id, id);
    let stored = m.get::<Workout>(id).await.unwrap().unwrap();
    assert_eq!(stored.calories_burned, 450.0);
    assert_eq!(stored.type_description, "Tempo run");
    assert_eq!(m.list::<Workout>().await.unwrap().len(), 1);
}

#[tokio::test]
async fn saving_an_unknown_identity_is_not_found() {
    let m = manager();
    let mut ghost = Recovery::new(date(2026, 1, 1), 30, "Stretching", "");
    ghost.recovery_id = 42;
    let err = m.save(&mut ghost).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Recovery not found"));
    assert!(m.list::<Recovery>().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleted_records_stay_gone() {
    let m = manager();
    let mut e = Equipment::new("Rower", "Concept2", "Cardio", "full body");
    m.save(&mut e).await.unwrap();
    assert!(m.delete::<Equipment>(e.equipment_id).await.unwrap());
    assert_eq!(m.get::<Equipment>(e.equipment_id).await.unwrap(), None);
    assert!(!m.delete::<Equipment>(e.equipment_id).await.unwrap());
}

#[tokio::test]
async fn calories_burned_over_inclusive_range() {
    let m = manager();
    for (on, kcal) in [(date(2026, 1, 1), 300.0), (date(2026, 1, 15), 400.0), (date(2026, 2, 1), 500.0)] {
        m.save(&mut workout(on, kcal, 6)).await.unwrap();
    }
    let total = m.total_calories_burned(date(2026, 1, 1), date(2026, 1, 31)).await.unwrap();
    assert_eq!(total, 700.0);
    let total = m.total_calories_burned(date(2026, 3, 1), date(2026, 3, 31)).await.unwrap();
    assert_eq!(total, 0.0);
}

#[tokio::test]
async fn listings_are_newest_first_and_filterable() {
    let m = manager();
    let mut legs = MuscleGroup::new("Legs", "Squat day", 2, 4, 8, 100.0);
    m.save(&mut legs).await.unwrap();
    m.save(&mut workout(date(2026, 1, 1), 300.0, 5)).await.unwrap();
    let mut leg_day = workout(date(2026, 1, 20), 500.0, 8);
    leg_day.muscle_group_id = Some(legs.muscle_group_id);
    m.save(&mut leg_day).await.unwrap();
    m.save(&mut workout(date(2026, 1, 10), 350.0, 7)).await.unwrap();

    let dates: Vec<_> = m.list::<Workout>().await.unwrap().iter().map(|w| w.workout_date).collect();
    assert_eq!(dates, vec![date(2026, 1, 20), date(2026, 1, 10), date(2026, 1, 1)]);

    let by_group = m
        .find::<Workout>(&WorkoutFilter::MuscleGroup(legs.muscle_group_id))
        .await
        .unwrap();
    assert_eq!(by_group, vec![leg_day]);

    let high = m.high_intensity_workouts().await.unwrap();
    assert_eq!(high.len(), 1);
    assert_eq!(m.muscle_group_by_name("Legs").await.unwrap(), Some(legs));
    assert_eq!(m.muscle_group_by_name("Arms").await.unwrap(), None);
}

#[tokio::test]
async fn nutrition_and_recovery_aggregates() {
    let m = manager();
    let day = date(2026, 3, 1);
    m.save(&mut Nutrition::new(FoodFamily::Meat, 0.0, 0.0, 10.0, 30.0, 0.0, day)).await.unwrap();
    m.save(&mut Nutrition::new(FoodFamily::Fruit, 200.0, 25.0, 0.0, 1.0, 20.0, day)).await.unwrap();
    m.save(&mut Nutrition::new(FoodFamily::Dairy, 0.0, 5.0, 5.0, 5.0, 5.0, date(2026, 3, 2)))
        .await
        .unwrap();
    assert_eq!(m.total_calories_for_date(day).await.unwrap(), 210.0 + 104.0);
    assert_eq!(m.total_protein_for_date(day).await.unwrap(), 31.0);

    m.save(&mut Recovery::new(date(2026, 3, 1), 60, "Sauna", "")).await.unwrap();
    m.save(&mut Recovery::new(date(2026, 3, 5), 90, "Massage", "foam roller")).await.unwrap();
    m.save(&mut Recovery::new(date(2026, 4, 1), 30, "Stretching", "")).await.unwrap();
    assert_eq!(m.total_recovery_time(date(2026, 3, 1), date(2026, 3, 31)).await.unwrap(), 150);
    let long = m.long_recovery_sessions().await.unwrap();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].kind, "Massage");
}

#[tokio::test]
async fn cardio_equipment_and_name_lookup() {
    let m = manager();
    m.save(&mut Equipment::new("Treadmill", "", "CARDIO Machines", "legs")).await.unwrap();
    m.save(&mut Equipment::new("Barbell", "", "Free Weights", "full body")).await.unwrap();
    let cardio = m.cardio_equipment().await.unwrap();
    assert_eq!(cardio.len(), 1);
    assert_eq!(cardio[0].name, "Treadmill");
    assert_eq!(m.equipment_by_name("Barbell").await.unwrap().map(|e| e.category), Some("Free Weights".to_string()));
    m.test_connection().await.unwrap();
}

#[tokio::test]
async fn zero_muscle_group_reads_back_as_unassigned() {
    let m = manager();
    let mut w = workout(date(2026, 1, 5), 300.0, 6);
    w.muscle_group_id = Some(0);
    m.save(&mut w).await.unwrap();
    assert_eq!(w.muscle_group_id, None);
    let stored = m.get::<Workout>(w.workout_id).await.unwrap().unwrap();
    assert_eq!(stored.muscle_group_id, None);
    assert!(m.find::<Workout>(&WorkoutFilter::MuscleGroup(0)).await.unwrap().is_empty());
    assert_eq!(m.find::<Workout>(&WorkoutFilter::Unassigned).await.unwrap(), vec![stored]);
}

#[tokio::test]
async fn named_records_list_in_byte_order() {
    let m = manager();
    for name in ["b", "C", "a"] {
        m.save(&mut MuscleGroup::new(name, "", 1, 3, 10, 20.0)).await.unwrap();
        m.save(&mut Equipment::new(name, "", "", "")).await.unwrap();
    }
    let groups: Vec<String> = m.list::<MuscleGroup>().await.unwrap().into_iter().map(|g| g.name).collect();
    assert_eq!(groups, vec!["C", "a", "b"]);
    let equipment: Vec<String> = m.list::<Equipment>().await.unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(equipment, vec!["C", "a", "b"]);
}

#[tokio::test]
async fn nutrition_lists_newest_meal_first_with_identity_tie_break() {
    let m = manager();
    let mut ids = Vec::new();
    for day in [1, 9, 3, 9] {
        let mut n = Nutrition::new(FoodFamily::Mixed, 0.0, 1.0, 1.0, 1.0, 0.0, date(2026, 2, day));
        m.save(&mut n).await.unwrap();
        ids.push(n.nutrition_id);
    }
    let listed: Vec<(NaiveDate, i32)> = m
        .list::<Nutrition>()
        .await
        .unwrap()
        .iter()
        .map(|n| (n.meal_date, n.nutrition_id))
        .collect();
    assert_eq!(
        listed,
        vec![
            (date(2026, 2, 9), ids[1]),
            (date(2026, 2, 9), ids[3]),
            (date(2026, 2, 3), ids[2]),
            (date(2026, 2, 1), ids[0]),
        ]
    );
}

#[tokio::test]
async fn recovery_ties_break_on_identity() {
    let m = manager();
    let mut first = Recovery::new(date(2026, 3, 1), 20, "Sauna", "");
    let mut second = Recovery::new(date(2026, 3, 1), 40, "Massage", "");
    m.save(&mut first).await.unwrap();
    m.save(&mut second).await.unwrap();
    let ids: Vec<i32> = m.list::<Recovery>().await.unwrap().iter().map(|r| r.recovery_id).collect();
    assert_eq!(ids, vec![first.recovery_id, second.recovery_id]);
}

#[tokio::test]
async fn update_keeps_created_at_and_refreshes_updated_at() {
    let m = manager();
    let mut e = Equipment::new("Bike", "", "Cardio", "legs");
    m.save(&mut e).await.unwrap();
    let (created, updated) = (e.created_at, e.updated_at);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    e.description = "Spin bike".into();
    m.save(&mut e).await.unwrap();

    let stored = m.get::<Equipment>(e.equipment_id).await.unwrap().unwrap();
    assert_eq!(stored.created_at, created);
    assert!(stored.updated_at > updated);
    assert_eq!(stored.description, "Spin bike");
}
