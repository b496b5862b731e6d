use std::collections::HashSet;

use resolving_set_canvas::graph::{
	Distance, GraphError, GraphStore, Session, VertexId, distances_from, recompute,
};

fn vectors(session: &Session) -> Vec<(u32, Vec<Distance>)> {
	session
		.current_distance_vectors()
		.iter()
		.map(|(id, v)| (id.get(), v.as_slice().to_vec()))
		.collect()
}

fn finite(raw: &[u32]) -> Vec<Distance> {
	raw.iter().copied().map(Distance::Finite).collect()
}

/// Vertices 1, 2, 3 joined as the path 1-2-3.
fn path_session() -> (Session, [VertexId; 3]) {
	let mut session = Session::new();
	let ids = [(); 3].map(|_| session.on_vertex_created());
	session.on_edge_created(ids[0], ids[1]).unwrap();
	session.on_edge_created(ids[1], ids[2]).unwrap();
	(session, ids)
}

#[test]
fn path_resolved_from_an_end() {
	let (mut session, ids) = path_session();
	assert_eq!(ids.map(VertexId::get), [1, 2, 3]);
	session.on_landmark_toggled(ids[0]).unwrap();
	assert_eq!(
		vectors(&session),
		vec![(1, finite(&[0])), (2, finite(&[1])), (3, finite(&[2]))]
	);
	assert!(session.is_resolved());
}

#[test]
fn path_not_resolved_from_the_middle() {
	let (mut session, ids) = path_session();
	session.on_landmark_toggled(ids[1]).unwrap();
	assert_eq!(
		vectors(&session),
		vec![(1, finite(&[1])), (2, finite(&[0])), (3, finite(&[1]))]
	);
	assert!(!session.is_resolved());
	assert_eq!(
		session.ambiguous_vertices().iter().copied().collect::<Vec<_>>(),
		vec![ids[0], ids[2]]
	);
}

#[test]
fn disconnected_vertices_are_unreachable() {
	let mut session = Session::new();
	let a = session.on_vertex_created();
	session.on_vertex_created();
	session.on_landmark_toggled(a).unwrap();
	assert_eq!(
		vectors(&session),
		vec![(1, finite(&[0])), (2, vec![Distance::Unreachable])]
	);
	assert!(session.is_resolved());
}

#[test]
fn triangle_without_landmarks_is_not_resolved() {
	let mut session = Session::new();
	let ids = [(); 3].map(|_| session.on_vertex_created());
	for (u, v) in [(0, 1), (1, 2), (2, 0)] {
		session.on_edge_created(ids[u], ids[v]).unwrap();
	}
	assert!(session.current_distance_vectors().values().all(|v| v.is_empty()));
	assert!(!session.is_resolved());
}

#[test]
fn deleting_the_only_landmark() {
	let (mut session, ids) = path_session();
	session.on_landmark_toggled(ids[0]).unwrap();
	session.on_vertex_deleted(ids[0]).unwrap();

	assert!(session.current_landmark_set().is_empty());
	assert_eq!(vectors(&session), vec![(2, vec![]), (3, vec![])]);
	assert!(!session.is_resolved());
	assert!(!session.store().has_edge(ids[0], ids[1]));
	assert!(session.store().has_edge(ids[1], ids[2]));

	// identifiers are not renumbered
	assert_eq!(session.on_vertex_created().get(), 4);
}

#[test]
fn repeated_operations_are_idempotent() {
	let (mut session, ids) = path_session();
	let edges = |s: &Session| s.store().edges().collect::<Vec<_>>();

	let once = edges(&session);
	session.on_edge_created(ids[0], ids[1]).unwrap();
	assert_eq!(edges(&session), once);

	session.on_edge_deleted(ids[1], ids[2]).unwrap();
	let once = edges(&session);
	session.on_edge_deleted(ids[1], ids[2]).unwrap();
	assert_eq!(edges(&session), once);

	session.on_vertex_deleted(ids[0]).unwrap();
	let once = edges(&session);
	assert_eq!(session.on_vertex_deleted(ids[0]), Err(GraphError::NotFound(ids[0])));
	assert_eq!(edges(&session), once);
	assert_eq!(session.store().vertex_count(), 2);
}

/// All graphs on four vertices against every landmark subset, each subset
/// taken in ascending id order.
#[test]
fn vectors_and_resolution_agree_on_every_small_graph() {
	let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
	for edge_mask in 0u32..(1 << pairs.len()) {
		let mut store = GraphStore::new();
		let ids: Vec<_> = (0..4).map(|_| store.add_vertex()).collect();
		for (bit, &(a, b)) in pairs.iter().enumerate() {
			if edge_mask & (1 << bit) != 0 {
				store.add_edge(ids[a], ids[b]).unwrap();
			}
		}

		for &source in &ids {
			let d = distances_from(&store, source).unwrap();
			assert_eq!(d[&source], Distance::Finite(0));
			assert_eq!(d.len(), ids.len());
			// neighbors differ by at most one step
			for &u in &ids {
				for &v in store.neighbors(u).unwrap() {
					match (d[&u], d[&v]) {
						(Distance::Finite(x), Distance::Finite(y)) => assert!(x.abs_diff(y) <= 1),
						(x, y) => assert_eq!(x, y),
					}
				}
			}
		}

		for landmark_mask in 0u32..16 {
			let landmarks: Vec<_> = (0..4)
				.filter(|i| landmark_mask & (1 << i) != 0)
				.map(|i| ids[i])
				.collect();
			let resolution = recompute(&store, &landmarks).unwrap();
			assert!(resolution.vectors().values().all(|v| v.len() == landmarks.len()));

			let distinct: HashSet<_> = resolution.vectors().values().collect();
			assert_eq!(
				resolution.is_resolved(),
				distinct.len() == resolution.vectors().len(),
				"edges {edge_mask:06b}, landmarks {landmark_mask:04b}"
			);
			// a landmark is the only vertex at distance 0 from itself
			for (i, &w) in landmarks.iter().enumerate() {
				for (&x, v) in resolution.vectors() {
					assert_eq!(v.as_slice()[i] == Distance::Finite(0), x == w);
				}
			}
		}
	}
}

/// Deterministic pseudo-random numbers, good enough to shuffle edits.
fn rand_simple(seed: usize) -> usize {
	((seed + 1) * 9301 + 49297) % 233280
}

#[test]
fn random_edits_keep_the_graph_consistent() {
	let mut session = Session::new();
	let mut seed = 7;
	let mut next = |bound: usize| {
		seed = rand_simple(seed);
		seed % bound
	};

	for _ in 0..500 {
		let live: Vec<_> = session.store().vertices().collect();
		let pick = |i: usize| live.get(i % live.len().max(1)).copied();
		let result = match next(6) {
			0 | 1 => {
				session.on_vertex_created();
				Ok(())
			}
			2 => match pick(next(16)) {
				Some(id) => session.on_vertex_deleted(id),
				None => Ok(()),
			},
			3 => match (pick(next(16)), pick(next(16))) {
				(Some(u), Some(v)) => session.on_edge_created(u, v),
				_ => Ok(()),
			},
			4 => match (pick(next(16)), pick(next(16))) {
				(Some(u), Some(v)) => session.on_edge_deleted(u, v),
				_ => Ok(()),
			},
			_ => match pick(next(16)) {
				Some(id) => session.on_landmark_toggled(id),
				None => Ok(()),
			},
		};
		assert!(matches!(result, Ok(()) | Err(GraphError::InvalidEdge(_))));

		let store = session.store();
		for u in store.vertices() {
			let neighbors = store.neighbors(u).unwrap();
			assert!(!neighbors.contains(&u));
			for &v in neighbors {
				assert!(store.neighbors(v).unwrap().contains(&u));
			}
		}
		for edge in store.edges() {
			let (u, v) = edge.endpoints();
			assert!(store.has_vertex(u) && store.has_vertex(v));
		}
		let landmarks = session.current_landmark_set();
		assert!(landmarks.iter().all(|&w| store.has_vertex(w)));
		assert_eq!(session.current_distance_vectors().len(), store.vertex_count());
		assert!(session
			.current_distance_vectors()
			.values()
			.all(|v| v.len() == landmarks.len()));
	}
}
