// Peso de dependencia: largo de la cadena más larga de ramos futuros que
// requieren (directa o indirectamente) a cada ramo.
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

use crate::error::PlannerError;
use crate::models::Catalog;

/// Tabla de pesos de una sola corrida de planificación.
///
/// Se construye completa en `compute` y luego solo se consulta; no hay caché
/// global, cada corrida arma la suya.
#[derive(Debug, Clone, Default)]
pub struct DependencyWeights {
    weights: HashMap<String, u32>,
}

impl DependencyWeights {
    /// Construye el grafo prerequisito -> dependiente (incluye códigos que solo
    /// aparecen en aristas) y calcula el camino más largo desde cada nodo en
    /// orden topológico inverso. Un ciclo (o auto-referencia) aborta con
    /// `CycleDetected`.
    pub fn compute(catalog: &Catalog) -> Result<Self, PlannerError> {
        let mut graph: DiGraph<String, ()> = DiGraph::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        let mut node_for = |graph: &mut DiGraph<String, ()>, code: &str| -> NodeIndex {
            if let Some(&idx) = node_map.get(code) {
                return idx;
            }
            let idx = graph.add_node(code.to_string());
            node_map.insert(code.to_string(), idx);
            idx
        };

        for c in catalog.courses.iter() {
            node_for(&mut graph, &c.id);
        }
        for e in catalog.edges.iter() {
            let from = node_for(&mut graph, &e.prereq);
            let to = node_for(&mut graph, &e.course);
            if graph.find_edge(from, to).is_none() {
                graph.add_edge(from, to, ());
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| PlannerError::CycleDetected {
            course: graph[cycle.node_id()].clone(),
        })?;

        // Los dependientes aparecen después en `order`, así que al recorrer al
        // revés sus pesos ya están resueltos.
        let mut depth: HashMap<NodeIndex, u32> = HashMap::with_capacity(order.len());
        for &idx in order.iter().rev() {
            let w = graph
                .neighbors_directed(idx, Direction::Outgoing)
                .map(|d| 1 + depth.get(&d).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);
            depth.insert(idx, w);
        }

        let weights = depth
            .into_iter()
            .map(|(idx, w)| (graph[idx].clone(), w))
            .collect();
        Ok(DependencyWeights { weights })
    }

    /// Peso del ramo; 0 para códigos desconocidos.
    pub fn weight(&self, course_id: &str) -> u32 {
        self.weights.get(course_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
