//! Unit tests for vr-input.

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use vr_core::{Category, Coordinate};

    use crate::{InputError, load_places_reader};

    const HEADER: &str = "id,name,category,address,lat,lng\n";

    fn load(body: &str) -> Result<Vec<vr_core::Place>, InputError> {
        load_places_reader(Cursor::new(format!("{HEADER}{body}")))
    }

    #[test]
    fn loads_located_and_unlocated_rows() {
        let places = load(
            "mty-fundidora,Parque Fundidora,park,\"Av. Fundidora 501, Obrera\",25.6784,-100.2836\n\
             mty-cafe,Café Iguana,cafe,\"Montemayor 927, Barrio Antiguo\",,\n",
        )
        .unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].id.as_str(), "mty-fundidora");
        assert_eq!(places[0].category, Category::Park);
        assert_eq!(places[0].address, "Av. Fundidora 501, Obrera");
        assert_eq!(places[0].coordinate, Some(Coordinate::new(25.6784, -100.2836)));
        assert_eq!(places[1].category, Category::Cafe);
        assert!(places[1].coordinate.is_none());
    }

    #[test]
    fn half_coordinate_is_treated_as_missing() {
        let places = load("x,X,museum,Somewhere,25.5,\n").unwrap();
        assert!(places[0].coordinate.is_none());
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let places = load("x,X,rooftop-bar,Somewhere,,\n").unwrap();
        assert_eq!(places[0].category, Category::Other("rooftop-bar".into()));
    }

    #[test]
    fn blank_identity_rows_are_skipped() {
        let places = load(
            ",No Id,park,Somewhere,,\n\
             y,,park,Somewhere,,\n\
             z,Z,park,   ,,\n\
             ok,Ok,park,Somewhere,,\n",
        )
        .unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].id.as_str(), "ok");
    }

    #[test]
    fn bad_number_names_the_line() {
        let err = load("a,A,park,Somewhere,1,2\nb,B,park,Elsewhere,north,2\n").unwrap_err();
        match err {
            InputError::Parse(msg) => {
                assert!(msg.starts_with("line 3:"), "{msg}");
                assert!(msg.contains("lat"), "{msg}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let err = load("a,A,park,Somewhere,91.0,0.0\n").unwrap_err();
        assert!(matches!(err, InputError::Parse(_)));
    }

    #[test]
    fn empty_file_yields_no_places() {
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_places_csv(std::path::Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}

// ── Travel mode parsing ───────────────────────────────────────────────────────

#[cfg(test)]
mod travel_mode {
    use vr_core::TravelMode;

    use crate::parse_travel_mode;

    #[test]
    fn car_words_mean_driving() {
        for text in ["driving", "Driving", "carro", "en carro", "auto", "AUTOMÓVIL"] {
            assert_eq!(parse_travel_mode(text), TravelMode::Driving, "{text}");
        }
    }

    #[test]
    fn everything_else_means_walking() {
        for text in ["walking", "a pie", "", "bike", "drive"] {
            assert_eq!(parse_travel_mode(text), TravelMode::Walking, "{text}");
        }
    }
}

// ── Route request ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod request {
    use vr_core::{Category, Coordinate, TravelMode};
    use vr_route::RouteQuality;

    use crate::{InputError, RawPlace, RouteRequest};

    #[test]
    fn missing_or_empty_places_is_empty_request() {
        for body in [r#"{}"#, r#"{"places": null}"#, r#"{"places": []}"#] {
            let req = RouteRequest::from_json(body).unwrap();
            assert!(matches!(req.valid_places(), Err(InputError::EmptyRequest)), "{body}");
        }
    }

    #[test]
    fn all_malformed_places_is_no_valid_places() {
        let req = RouteRequest::from_json(
            r#"{"places": [{"id": "a", "name": "A"}, {"name": "B", "address": "x"}, {"id": " ", "name": "C", "address": "y"}]}"#,
        )
        .unwrap();
        assert!(matches!(req.plan(), Err(InputError::NoValidPlaces)));
    }

    #[test]
    fn malformed_places_are_filtered_in_order() {
        let req = RouteRequest::from_json(
            r#"{"places": [
                {"id": "a", "name": "A", "category": "park", "address": "Calle 1", "lat": 19.4, "lng": -99.1},
                {"id": "bad", "name": "", "address": "Calle 2"},
                {"id": "c", "name": "C", "address": "Calle 3", "lat": null, "lng": -99.2}
            ]}"#,
        )
        .unwrap();

        let places = req.valid_places().unwrap();
        let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(places[0].category, Category::Park);
        assert!(places[0].has_coordinates());
        assert!(!places[1].has_coordinates());
    }

    #[test]
    fn identity_fields_are_trimmed() {
        let raw = RawPlace {
            id:       Some("  p1 ".into()),
            name:     Some(" Parque ".into()),
            category: Some(" park ".into()),
            address:  Some("\tAv. Fundidora 501 ".into()),
            ..RawPlace::default()
        };
        let place = raw.validate().unwrap();
        assert_eq!(place.id.as_str(), "p1");
        assert_eq!(place.name, "Parque");
        assert_eq!(place.category, Category::Park);
        assert_eq!(place.address, "Av. Fundidora 501");
    }

    #[test]
    fn out_of_range_coordinate_leaves_place_address_only() {
        let req = RouteRequest::from_json(
            r#"{"places": [
                {"id": "n", "name": "North", "address": "Calle 1", "lat": 91.0, "lng": -99.1},
                {"id": "e", "name": "East", "address": "Calle 2", "lat": 19.4, "lng": 181.0},
                {"id": "ok", "name": "Ok", "address": "Calle 3", "lat": 19.4, "lng": -99.1}
            ]}"#,
        )
        .unwrap();

        let places = req.valid_places().unwrap();
        assert_eq!(places.len(), 3);
        assert!(places[0].coordinate.is_none());
        assert!(places[1].coordinate.is_none());
        assert_eq!(places[2].coordinate, Some(Coordinate::new(19.4, -99.1)));
    }

    #[test]
    fn option_defaults() {
        let req = RouteRequest::from_json(r#"{"places": []}"#).unwrap();
        let opts = req.route_options();
        assert_eq!(opts.mode, TravelMode::Walking);
        assert_eq!(opts.effective_max_distance_km(), None);
        assert!(!opts.prefer_scenic_route);
        assert!(opts.avoid_backtracking);
    }

    #[test]
    fn explicit_options_are_honoured() {
        let req = RouteRequest::from_json(
            r#"{"options": {"mode": "carro", "maxDistance": 12.5, "preferScenicRoute": true, "avoidBacktracking": false}}"#,
        )
        .unwrap();
        let opts = req.route_options();
        assert_eq!(opts.mode, TravelMode::Driving);
        assert_eq!(opts.effective_max_distance_km(), Some(12.5));
        assert!(opts.prefer_scenic_route);
        assert!(!opts.avoid_backtracking);
    }

    #[test]
    fn zero_max_distance_means_unbounded() {
        let req = RouteRequest::from_json(r#"{"options": {"maxDistance": 0}}"#).unwrap();
        assert_eq!(req.route_options().effective_max_distance_km(), None);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(RouteRequest::from_json("{places"), Err(InputError::Json(_))));
    }

    #[test]
    fn single_place_plans_to_itself() {
        let req = RouteRequest::from_json(
            r#"{"places": [{"id": "z", "name": "Zócalo", "category": "landmark", "address": "Centro", "lat": 19.4326, "lng": -99.1332}]}"#,
        )
        .unwrap();
        let route = req.plan().unwrap();
        assert_eq!(route.stop_count(), 1);
        assert_eq!(route.estimated_minutes, 30);
        assert_eq!(route.route_quality, RouteQuality::Excellent);
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

/// Request body or CSV in, ordered itinerary and deep link out.
#[cfg(test)]
mod end_to_end {
    use std::io::Cursor;

    use vr_core::TravelMode;
    use vr_route::{RouteOptions, RouteQuality, RouteResult, generate_optimal_route};

    use crate::{RouteRequest, load_places_reader};

    fn stop_ids(route: &RouteResult) -> Vec<&str> {
        route.ids().map(|id| id.as_str()).collect()
    }

    #[test]
    fn json_request_is_ordered_and_linked() {
        let body = r#"{
            "places": [
                {"id": "a", "name": "Café A", "category": "cafe", "address": "Calle A", "lat": 19.40, "lng": -99.17},
                {"id": "b", "name": "Café B", "category": "cafe", "address": "Calle B", "lat": 19.41, "lng": -99.15},
                {"id": "c", "name": "Café C", "category": "cafe", "address": "Calle C", "lat": 19.43, "lng": -99.20}
            ],
            "options": {"mode": "walking"}
        }"#;

        let route = RouteRequest::from_json(body).unwrap().plan().unwrap();

        assert_eq!(stop_ids(&route), ["b", "a", "c"]);
        assert!((route.total_distance_km - 6.9595).abs() < 1e-3);
        assert_eq!(route.estimated_minutes, 164);
        assert_eq!(route.route_quality, RouteQuality::Fair);
        assert_eq!(
            route.gmaps_url,
            "https://www.google.com/maps/dir/?api=1\
             &origin=19.41,-99.15&destination=19.43,-99.2\
             &waypoints=19.4,-99.17&travelmode=walking",
        );
    }

    #[test]
    fn address_only_request_keeps_order() {
        let body = r#"{
            "places": [
                {"id": "m", "name": "Madero", "category": "walkway", "address": "Calle Madero 1"},
                {"id": "j", "name": "Juárez", "category": "district", "address": "Av. Juárez 5"}
            ],
            "options": {"mode": "en carro"}
        }"#;

        let route = RouteRequest::from_json(body).unwrap().plan().unwrap();

        assert_eq!(stop_ids(&route), ["m", "j"]);
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.estimated_minutes, 90);
        assert_eq!(route.route_quality, RouteQuality::Fair);
        assert!(!route.has_coordinates());
        assert_eq!(
            route.gmaps_url,
            "https://www.google.com/maps/dir/?api=1\
             &origin=Calle%20Madero%201&destination=Av.%20Ju%C3%A1rez%205&travelmode=driving",
        );
    }

    #[test]
    fn csv_places_plan_to_a_permutation() {
        let csv = "\
            id,name,category,address,lat,lng\n\
            fundidora,Parque Fundidora,park,\"Av. Fundidora 501, Obrera\",25.6784,-100.2836\n\
            marco,Museo MARCO,museum,\"Zuazua y Jardón, Centro\",25.6646,-100.3096\n\
            macroplaza,Macroplaza,landmark,\"Zuazua s/n, Centro\",25.6694,-100.3097\n\
            paseo,Paseo Santa Lucía,walkway,\"Paseo Santa Lucía, Centro\",25.6700,-100.2990\n\
            iguana,Café Iguana,cafe,\"Montemayor 927, Barrio Antiguo\",,\n";
        let places = load_places_reader(Cursor::new(csv)).unwrap();
        assert_eq!(places.len(), 5);

        let opts = RouteOptions::new(TravelMode::Walking).with_scenic_preference(true);
        let route = generate_optimal_route(&places, &opts).unwrap();

        let mut got: Vec<&str> = stop_ids(&route);
        got.sort_unstable();
        assert_eq!(got, ["fundidora", "iguana", "macroplaza", "marco", "paseo"]);
        assert!(route.total_distance_km > 0.0);
        assert!(route.gmaps_url.contains("&waypoints="));
        assert!(route.gmaps_url.ends_with("&travelmode=walking"));
    }
}
