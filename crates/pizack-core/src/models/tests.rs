#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        error::PizackError,
        models::{timestamp_now, Order, OrderStatus, OrderSummary, PizzaGrade, ShiftReport, SubTask},
    };

    fn create_test_subtask(id: &str, done: bool) -> SubTask {
        SubTask {
            id: id.to_string(),
            title: format!("Topping {id}"),
            is_completed: done,
        }
    }

    fn create_test_order(flags: &[bool]) -> Order {
        Order {
            id: "order-1".to_string(),
            title: "Build login".to_string(),
            description: Some("OAuth flow".to_string()),
            sub_tasks: flags
                .iter()
                .enumerate()
                .map(|(i, done)| create_test_subtask(&format!("st-{i}"), *done))
                .collect(),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            completed_at: None,
            status: OrderStatus::Cooking,
        }
    }

    #[test]
    fn test_grade_boundaries() {
        for n in 0..=2 {
            assert_eq!(PizzaGrade::from_subtask_count(n), PizzaGrade::Green, "n={n}");
        }
        for n in 3..=5 {
            assert_eq!(PizzaGrade::from_subtask_count(n), PizzaGrade::Red, "n={n}");
        }
        for n in [6, 7, 12, 100] {
            assert_eq!(PizzaGrade::from_subtask_count(n), PizzaGrade::Gold, "n={n}");
        }
    }

    #[test]
    fn test_grade_box_labels() {
        assert_eq!(PizzaGrade::Green.box_label(), "Snack Box");
        assert_eq!(PizzaGrade::Red.box_label(), "Regular Box");
        assert_eq!(PizzaGrade::Gold.box_label(), "Deluxe Box");
    }

    #[test]
    fn test_grade_follows_topping_count() {
        let mut order = create_test_order(&[true, true]);
        assert_eq!(order.grade(), PizzaGrade::Green);

        order.sub_tasks.push(SubTask::new("One more"));
        assert_eq!(order.grade(), PizzaGrade::Red);

        order.sub_tasks.truncate(1);
        assert_eq!(order.grade(), PizzaGrade::Green);
    }

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new("Build login", None);
        assert_eq!(order.status, OrderStatus::Cooking);
        assert!(order.sub_tasks.is_empty());
        assert!(order.completed_at.is_none());
        assert_eq!(order.created_at.subsec_nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn test_new_subtasks_have_distinct_ids() {
        let a = SubTask::new("a");
        let b = SubTask::new("b");
        assert_ne!(a.id, b.id);
        assert!(!a.is_completed);
    }

    #[test]
    fn test_progress() {
        assert_eq!(create_test_order(&[]).progress(), 0.0);
        assert_eq!(create_test_order(&[true, false]).progress(), 0.5);
        assert_eq!(create_test_order(&[true, true, true]).progress(), 1.0);
    }

    #[test]
    fn test_is_ready_to_bake() {
        assert!(!create_test_order(&[]).is_ready_to_bake());
        assert!(!create_test_order(&[true, false]).is_ready_to_bake());
        assert!(create_test_order(&[true, true]).is_ready_to_bake());
    }

    #[test]
    fn test_bake_empty_order_rejected() {
        let mut order = create_test_order(&[]);
        let err = order.bake(timestamp_now()).unwrap_err();
        assert!(matches!(err, PizackError::OrderNotReady { .. }));
        assert_eq!(order.status, OrderStatus::Cooking);
        assert!(order.completed_at.is_none());
    }

    #[test]
    fn test_bake_unfinished_order_rejected() {
        let mut order = create_test_order(&[true, false, false]);
        match order.bake(timestamp_now()).unwrap_err() {
            PizackError::OrderNotReady { id, reason } => {
                assert_eq!(id, "order-1");
                assert!(reason.contains("2 topping(s)"));
            }
            other => panic!("Expected OrderNotReady, got {other:?}"),
        }
        assert_eq!(order.status, OrderStatus::Cooking);
    }

    #[test]
    fn test_bake_sets_completion() {
        let mut order = create_test_order(&[true, true]);
        let at = Timestamp::from_second(1641081600).unwrap();
        order.bake(at).unwrap();

        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.completed_at, Some(at));
        assert!(order.completed_at.unwrap() >= order.created_at);
    }

    #[test]
    fn test_bake_twice_rejected() {
        let mut order = create_test_order(&[true]);
        let first = Timestamp::from_second(1641081600).unwrap();
        order.bake(first).unwrap();

        let err = order.bake(timestamp_now()).unwrap_err();
        assert!(matches!(err, PizackError::AlreadyCompleted { .. }));
        assert_eq!(order.completed_at, Some(first));
    }

    #[test]
    fn test_validate_accepts_lifecycle_states() {
        let mut order = create_test_order(&[true]);
        order.validate().unwrap();
        order.bake(timestamp_now()).unwrap();
        order.validate().unwrap();

        order.completed_at = None;
        assert!(matches!(
            order.validate(),
            Err(PizackError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_persisted_field_names() {
        let mut order = create_test_order(&[true]);
        order.bake(Timestamp::from_millisecond(1641081600123).unwrap()).unwrap();

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["createdAt"], 1640995200000i64);
        assert_eq!(value["completedAt"], 1641081600123i64);
        assert_eq!(value["subTasks"][0]["isCompleted"], true);
        assert!(value.get("grade").is_none());
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let mut order = create_test_order(&[]);
        order.description = None;

        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("description").is_none());
        assert!(value.get("completedAt").is_none());
    }

    #[test]
    fn test_order_summary_from_order() {
        let order = create_test_order(&[true, false, true]);
        let summary = OrderSummary::from(&order);

        assert_eq!(summary.total_toppings, 3);
        assert_eq!(summary.completed_toppings, 2);
        assert_eq!(summary.pending_toppings, 1);
        assert_eq!(summary.grade, PizzaGrade::Red);
        assert!((summary.progress - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shift_report_counts_only_baked_orders() {
        let mut baked = create_test_order(&[true, true, true]);
        baked.bake(timestamp_now()).unwrap();
        let cooking = create_test_order(&[true, false]);

        let report = ShiftReport::from_orders([&baked, &cooking]);
        assert_eq!(report.total_pizzas, 1);
        assert_eq!(report.total_toppings, 3);
        assert_eq!(report.score, 130);
    }

    #[test]
    fn test_shift_report_empty() {
        assert_eq!(ShiftReport::from_orders(&Vec::<Order>::new()), ShiftReport::default());
    }
}
