use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::pages::legal::{
    bullets, lead, para, Callout, ContactCard, LegalPage, Section, SubSection, LINK,
};
use crate::Route;

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Términos de Servicio">
            <Section number={1} title="Aceptación de los Términos">
                { para("Estos Términos de Servicio (\"Términos\") constituyen un acuerdo legal vinculante entre tú (\"Usuario\", \"tú\") y Macch (\"Macch\", \"nosotros\", \"nuestro\") que rige tu uso de la plataforma de atención al cliente Macch y todos los servicios relacionados (colectivamente, el \"Servicio\").") }
                { para("Al acceder o utilizar el Servicio a través de WhatsApp u otras plataformas de mensajería, aceptas estar sujeto a estos Términos. Si no estás de acuerdo con alguna parte de estos Términos, no debes utilizar el Servicio.") }
            </Section>

            <Section number={2} title="Descripción del Servicio">
                { para("Macch es una plataforma de atención al cliente basada en inteligencia artificial que permite a los usuarios finales de empresas realizar consultas, reportar problemas técnicos, gestionar sus cuentas y recibir soporte a través de canales de mensajería como WhatsApp.") }
                { para("El Servicio actúa como intermediario entre tú y la empresa de la cual eres cliente, facilitando la comunicación y resolución de consultas mediante tecnología de procesamiento de lenguaje natural e inteligencia artificial.") }
            </Section>

            <Section number={3} title="Elegibilidad">
                { lead("Para utilizar el Servicio, debes:") }
                { bullets(&[
                    "Tener al menos 18 años de edad",
                    "Ser cliente activo de una empresa que utilice los servicios de Macch",
                    "Tener capacidad legal para celebrar contratos vinculantes",
                    "Proporcionar información veraz y precisa",
                ]) }
            </Section>

            <Section number={4} title="Cuenta y Acceso">
                { lead("El acceso al Servicio se realiza a través de tu número de WhatsApp. Eres responsable de:") }
                { bullets(&[
                    "Mantener la seguridad de tu dispositivo y cuenta de WhatsApp",
                    "Todas las actividades que ocurran bajo tu número de teléfono",
                    "Notificarnos inmediatamente sobre cualquier uso no autorizado",
                ]) }
            </Section>

            <Section number={5} title="Uso Aceptable">
                { lead("Al utilizar el Servicio, aceptas NO:") }
                { bullets(&[
                    "Proporcionar información falsa o engañosa",
                    "Hacerte pasar por otra persona o entidad",
                    "Utilizar el Servicio para fines ilegales o no autorizados",
                    "Intentar acceder a información de otros usuarios",
                    "Enviar contenido ofensivo, amenazante, difamatorio o inapropiado",
                    "Interferir con el funcionamiento del Servicio",
                    "Utilizar sistemas automatizados para enviar mensajes masivos (spam)",
                    "Intentar realizar ingeniería inversa o extraer el código fuente",
                    "Evadir o manipular los sistemas de seguridad",
                    "Utilizar el Servicio para acosar o dañar a terceros",
                ]) }
            </Section>

            <Section number={6} title="Interacción con Inteligencia Artificial">
                <Callout>
                    <p class="text-yellow-200">
                        <span class="font-semibold">{"Importante:"}</span>
                        {" Macch utiliza inteligencia artificial para procesar y responder a tus consultas. Aunque nos esforzamos por proporcionar información precisa, las respuestas generadas por IA pueden contener errores o inexactitudes."}
                    </p>
                </Callout>
                { lead("Entiendes y aceptas que:") }
                { bullets(&[
                    "Las respuestas son generadas automáticamente y pueden requerir verificación",
                    "Para asuntos críticos o complejos, puedes solicitar atención humana",
                    "El Servicio puede transferir tu conversación a un agente humano cuando sea necesario",
                    "Tus conversaciones pueden ser utilizadas para mejorar el sistema de IA",
                ]) }
            </Section>

            <Section number={7} title="Relación con tu Proveedor de Servicios">
                { lead("Macch actúa como facilitador de comunicación entre tú y la empresa de la cual eres cliente. Es importante que entiendas que:") }
                { bullets(&[
                    "Tu relación contractual es directamente con la empresa proveedora del servicio",
                    "Macch no es responsable de los servicios que recibes de dicha empresa",
                    "Las políticas de facturación, precios y servicio son determinadas por tu proveedor",
                    "Las decisiones finales sobre tu cuenta son tomadas por tu proveedor de servicios",
                ]) }
            </Section>

            <Section number={8} title="Disponibilidad del Servicio">
                { lead("Nos esforzamos por mantener el Servicio disponible 24/7, pero no garantizamos disponibilidad ininterrumpida. El Servicio puede estar temporalmente no disponible debido a:") }
                { bullets(&[
                    "Mantenimiento programado o de emergencia",
                    "Actualizaciones del sistema",
                    "Problemas técnicos con WhatsApp o terceros proveedores",
                    "Causas de fuerza mayor",
                ]) }
            </Section>

            <Section number={9} title="Propiedad Intelectual">
                { para("Todo el contenido, características y funcionalidad del Servicio, incluyendo pero no limitado a texto, gráficos, logos, algoritmos, software y código, son propiedad exclusiva de Macch o sus licenciantes y están protegidos por leyes de propiedad intelectual.") }
                { para("No adquieres ningún derecho de propiedad sobre el Servicio. Se te otorga únicamente una licencia limitada, no exclusiva, no transferible y revocable para usar el Servicio de acuerdo con estos Términos.") }
            </Section>

            <Section number={10} title="Contenido del Usuario">
                { lead("Al enviar mensajes o contenido a través del Servicio, nos otorgas una licencia mundial, no exclusiva, libre de regalías para usar, procesar, almacenar y analizar dicho contenido con el fin de:") }
                { bullets(&[
                    "Proporcionar el Servicio",
                    "Mejorar nuestros sistemas de IA",
                    "Generar análisis agregados",
                    "Cumplir con obligaciones legales",
                ]) }
            </Section>

            <Section number={11} title="Privacidad">
                <p class="text-gray-400 leading-relaxed mb-4">
                    {"Tu privacidad es importante para nosotros. El uso de tu información personal está regido por nuestra "}
                    <Link<Route> to={Route::Privacy} classes={LINK}>{"Política de Privacidad"}</Link<Route>>
                    {", que forma parte integral de estos Términos."}
                </p>
            </Section>

            <Section number={12} title="Exclusión de Garantías">
                { para("EL SERVICIO SE PROPORCIONA \"TAL CUAL\" Y \"SEGÚN DISPONIBILIDAD\", SIN GARANTÍAS DE NINGÚN TIPO, YA SEAN EXPRESAS O IMPLÍCITAS.") }
                { lead("En la máxima medida permitida por la ley, Macch no garantiza que:") }
                { bullets(&[
                    "El Servicio cumplirá con tus requisitos específicos",
                    "El Servicio será ininterrumpido, oportuno, seguro o libre de errores",
                    "Los resultados obtenidos del uso del Servicio serán precisos o confiables",
                    "Cualquier error en el Servicio será corregido",
                ]) }
            </Section>

            <Section number={13} title="Limitación de Responsabilidad">
                { para("EN NINGÚN CASO MACCH, SUS DIRECTORES, EMPLEADOS, SOCIOS, AGENTES O AFILIADOS SERÁN RESPONSABLES POR DAÑOS INDIRECTOS, INCIDENTALES, ESPECIALES, CONSECUENTES O PUNITIVOS, INCLUYENDO PÉRDIDA DE BENEFICIOS, DATOS, USO U OTRAS PÉRDIDAS INTANGIBLES.") }
                { para("La responsabilidad total de Macch por cualquier reclamación relacionada con el Servicio no excederá el monto que hayas pagado a Macch en los últimos doce (12) meses, si corresponde.") }
            </Section>

            <Section number={14} title="Indemnización">
                { lead("Aceptas defender, indemnizar y mantener indemne a Macch y sus afiliados de cualquier reclamación, daño, obligación, pérdida, responsabilidad, costo o deuda que surja de:") }
                { bullets(&[
                    "Tu uso del Servicio",
                    "Tu violación de estos Términos",
                    "Tu violación de derechos de terceros",
                    "Cualquier contenido que envíes a través del Servicio",
                ]) }
            </Section>

            <Section number={15} title="Terminación">
                { lead("Podemos suspender o terminar tu acceso al Servicio inmediatamente, sin previo aviso, por cualquier motivo, incluyendo pero no limitado a:") }
                { bullets(&[
                    "Violación de estos Términos",
                    "Conducta que consideremos perjudicial para otros usuarios o para Macch",
                    "Solicitud de tu proveedor de servicios",
                    "Terminación de la relación con tu proveedor de servicios",
                ]) }
                { para("Puedes dejar de utilizar el Servicio en cualquier momento. Las disposiciones que por su naturaleza deban sobrevivir a la terminación, sobrevivirán.") }
            </Section>

            <Section number={16} title="Modificaciones al Servicio">
                { para("Nos reservamos el derecho de modificar, suspender o discontinuar el Servicio (o cualquier parte del mismo) en cualquier momento, con o sin previo aviso. No seremos responsables ante ti ni ante terceros por cualquier modificación, suspensión o discontinuación del Servicio.") }
            </Section>

            <Section number={17} title="Cambios a los Términos">
                { para("Nos reservamos el derecho de actualizar estos Términos en cualquier momento. Te notificaremos sobre cambios materiales publicando los nuevos Términos en nuestro sitio web y actualizando la fecha de \"última actualización\".") }
                { para("El uso continuado del Servicio después de la publicación de cambios constituye tu aceptación de dichos cambios.") }
            </Section>

            <Section number={18} title="Ley Aplicable y Jurisdicción">
                { para("Estos Términos se regirán e interpretarán de acuerdo con las leyes de la República Argentina, sin consideración a sus disposiciones sobre conflictos de leyes.") }
                { para("Cualquier disputa que surja en relación con estos Términos será sometida a la jurisdicción exclusiva de los tribunales ordinarios de la Ciudad Autónoma de Buenos Aires, Argentina, renunciando a cualquier otro fuero que pudiera corresponder.") }
            </Section>

            <Section number={19} title="Resolución de Disputas">
                { para("Antes de iniciar cualquier procedimiento legal, aceptas intentar resolver cualquier disputa de manera informal contactándonos primero. Si no podemos resolver la disputa informalmente, ambas partes acuerdan someterse a mediación antes de iniciar cualquier litigio.") }
            </Section>

            <Section number={20} title="Disposiciones Generales">
                <SubSection number="20.1" title="Acuerdo Completo">
                    { para("Estos Términos, junto con la Política de Privacidad, constituyen el acuerdo completo entre tú y Macch respecto al Servicio.") }
                </SubSection>
                <SubSection number="20.2" title="Divisibilidad">
                    { para("Si alguna disposición de estos Términos se considera inválida o inaplicable, dicha disposición se modificará en la medida mínima necesaria, y las disposiciones restantes permanecerán en pleno vigor y efecto.") }
                </SubSection>
                <SubSection number="20.3" title="Renuncia">
                    { para("El hecho de que Macch no ejerza cualquier derecho o disposición de estos Términos no constituirá una renuncia a dicho derecho o disposición.") }
                </SubSection>
                <SubSection number="20.4" title="Cesión">
                    { para("No puedes ceder o transferir estos Términos sin nuestro consentimiento previo por escrito. Macch puede ceder estos Términos sin restricción.") }
                </SubSection>
                <SubSection number="20.5" title="Notificaciones">
                    { para("Las notificaciones a Macch deben enviarse por correo electrónico a la dirección indicada abajo. Las notificaciones hacia ti se enviarán a través del Servicio o al número de WhatsApp registrado.") }
                </SubSection>
            </Section>

            <Section number={21} title="Contacto">
                <ContactCard
                    intro="Si tienes preguntas sobre estos Términos de Servicio, puedes contactarnos:"
                    email={config::LEGAL_EMAIL}
                />
            </Section>
        </LegalPage>
    }
}
